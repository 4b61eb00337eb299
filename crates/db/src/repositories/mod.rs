mod contact_message_repo;
mod demo_request_repo;

pub use contact_message_repo::ContactMessageRepo;
pub use demo_request_repo::DemoRequestRepo;

/// Hard cap on the number of records a single listing returns.
pub const MAX_LIST_LIMIT: i64 = 1000;

/// Clamp a caller-supplied listing limit into `1..=MAX_LIST_LIMIT`.
pub fn clamp_list_limit(limit: i64) -> i64 {
    limit.clamp(1, MAX_LIST_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_list_limit_respects_max() {
        assert_eq!(clamp_list_limit(5_000), MAX_LIST_LIMIT);
    }

    #[test]
    fn clamp_list_limit_floors_at_one() {
        assert_eq!(clamp_list_limit(0), 1);
        assert_eq!(clamp_list_limit(-3), 1);
    }

    #[test]
    fn clamp_list_limit_passes_through_valid_value() {
        assert_eq!(clamp_list_limit(50), 50);
    }
}
