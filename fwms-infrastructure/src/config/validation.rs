use anyhow::{anyhow, Result};

pub fn validate_bind_addr(value: &str) -> Result<()> {
    value
        .parse::<std::net::SocketAddr>()
        .map(|_| ())
        .map_err(|err| anyhow!("invalid bind_addr: {}", err))
}

pub fn validate_positive(field: &str, value: u64) -> Result<()> {
    if value == 0 {
        return Err(anyhow!("{} must be greater than 0", field));
    }
    Ok(())
}

pub fn validate_list_limit(value: usize, max: usize) -> Result<()> {
    if value == 0 || value > max {
        return Err(anyhow!("default_list_limit must be between 1 and {}", max));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_values() {
        assert!(validate_bind_addr("127.0.0.1:3400").is_ok());
        assert!(validate_bind_addr("localhost").is_err());
        assert!(validate_positive("max_body_bytes", 0).is_err());
        assert!(validate_list_limit(0, 200).is_err());
        assert!(validate_list_limit(201, 200).is_err());
        assert!(validate_list_limit(50, 200).is_ok());
    }
}
