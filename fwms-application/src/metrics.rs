use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    waste_logged: AtomicU64,
    requests_created: AtomicU64,
    requests_decided: AtomicU64,
    transports_scheduled: AtomicU64,
    pickups_completed: AtomicU64,
    persist_failures: AtomicU64,
    storage_degraded: AtomicBool,
}

impl Metrics {
    pub fn record_waste_logged(&self) {
        self.waste_logged.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_request_created(&self) {
        self.requests_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_request_decided(&self) {
        self.requests_decided.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_transport_scheduled(&self) {
        self.transports_scheduled.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_pickup_completed(&self) {
        self.pickups_completed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_persist_result(&self, ok: bool) {
        if !ok {
            self.persist_failures.fetch_add(1, Ordering::Relaxed);
        }
        self.storage_degraded.store(!ok, Ordering::Relaxed);
    }

    /// True while the most recent snapshot write failed.
    pub fn storage_degraded(&self) -> bool {
        self.storage_degraded.load(Ordering::Relaxed)
    }

    pub fn render_prometheus(&self) -> String {
        let waste = self.waste_logged.load(Ordering::Relaxed);
        let created = self.requests_created.load(Ordering::Relaxed);
        let decided = self.requests_decided.load(Ordering::Relaxed);
        let scheduled = self.transports_scheduled.load(Ordering::Relaxed);
        let completed = self.pickups_completed.load(Ordering::Relaxed);
        let failures = self.persist_failures.load(Ordering::Relaxed);
        let degraded = u8::from(self.storage_degraded());

        format!(
            "# TYPE fwms_waste_logged_total counter\n\
fwms_waste_logged_total {}\n\
# TYPE fwms_pickup_requests_created_total counter\n\
fwms_pickup_requests_created_total {}\n\
# TYPE fwms_pickup_requests_decided_total counter\n\
fwms_pickup_requests_decided_total {}\n\
# TYPE fwms_transports_scheduled_total counter\n\
fwms_transports_scheduled_total {}\n\
# TYPE fwms_pickups_completed_total counter\n\
fwms_pickups_completed_total {}\n\
# TYPE fwms_persist_failures_total counter\n\
fwms_persist_failures_total {}\n\
# TYPE fwms_storage_degraded gauge\n\
fwms_storage_degraded {}\n",
            waste, created, decided, scheduled, completed, failures, degraded
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persist_failure_sets_and_clears_degraded_flag() {
        let metrics = Metrics::default();
        metrics.record_persist_result(false);
        assert!(metrics.storage_degraded());
        metrics.record_persist_result(true);
        assert!(!metrics.storage_degraded());

        let rendered = metrics.render_prometheus();
        assert!(rendered.contains("fwms_persist_failures_total 1\n"));
        assert!(rendered.contains("fwms_storage_degraded 0\n"));
    }
}
