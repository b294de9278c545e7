use std::net::Ipv4Addr;

use super::*;

fn addr(last: u8) -> IpAddr {
    IpAddr::V4(Ipv4Addr::new(203, 0, 113, last))
}

fn limiter(per_client: usize, global: usize) -> RateLimiter {
    RateLimiter::with_config(RateLimitConfig {
        per_client_limit: per_client,
        per_client_window: Duration::from_secs(600),
        global_limit: global,
        global_window: Duration::from_secs(600),
    })
}

#[test]
fn default_config_matches_documented_limits() {
    let cfg = RateLimitConfig::default();
    assert_eq!(cfg.per_client_limit, 5);
    assert_eq!(cfg.global_limit, 60);
    assert_eq!(cfg.per_client_window, Duration::from_secs(600));
    assert_eq!(cfg.global_window, Duration::from_secs(600));
}

#[test]
fn per_client_allows_up_to_limit() {
    let rl = limiter(5, 60);
    let client = addr(1);
    let now = Instant::now();

    for i in 0..5 {
        assert!(rl.check_and_record_at(client, now).is_ok(), "request {i} should succeed");
    }
    assert_eq!(
        rl.check_and_record_at(client, now),
        Err(RateLimitError::PerClientExceeded { limit: 5, window_secs: 600 })
    );
}

#[test]
fn clients_are_limited_independently() {
    let rl = limiter(2, 60);
    let now = Instant::now();

    rl.check_and_record_at(addr(1), now).unwrap();
    rl.check_and_record_at(addr(1), now).unwrap();
    assert!(rl.check_and_record_at(addr(1), now).is_err());
    assert!(rl.check_and_record_at(addr(2), now).is_ok());
}

#[test]
fn global_allows_up_to_limit() {
    let rl = limiter(5, 3);
    let now = Instant::now();

    for i in 0..3 {
        assert!(rl.check_and_record_at(addr(i), now).is_ok(), "request {i} should succeed");
    }
    assert_eq!(
        rl.check_and_record_at(addr(99), now),
        Err(RateLimitError::GlobalExceeded { limit: 3, window_secs: 600 })
    );
}

#[test]
fn rejected_requests_are_not_recorded() {
    let rl = limiter(1, 2);
    let now = Instant::now();

    rl.check_and_record_at(addr(1), now).unwrap();
    for _ in 0..10 {
        assert!(rl.check_and_record_at(addr(1), now).is_err());
    }
    // Global still has room for one more because rejections did not count.
    assert!(rl.check_and_record_at(addr(2), now).is_ok());
}

#[test]
fn window_expiry_allows_new_requests() {
    let rl = limiter(2, 60);
    let client = addr(1);
    let start = Instant::now();

    rl.check_and_record_at(client, start).unwrap();
    rl.check_and_record_at(client, start).unwrap();
    assert!(rl.check_and_record_at(client, start).is_err());

    let later = start + Duration::from_secs(600);
    assert!(rl.check_and_record_at(client, later).is_ok());
}

#[test]
fn window_slides_rather_than_resets() {
    let rl = limiter(2, 60);
    let client = addr(1);
    let start = Instant::now();

    rl.check_and_record_at(client, start).unwrap();
    rl.check_and_record_at(client, start + Duration::from_secs(300)).unwrap();

    // First entry has aged out; second is still inside the window.
    let t = start + Duration::from_secs(601);
    assert!(rl.check_and_record_at(client, t).is_ok());
    assert!(rl.check_and_record_at(client, t).is_err());
}

#[test]
fn drained_clients_are_forgotten() {
    let rl = limiter(5, 60);
    let start = Instant::now();

    for i in 0..10 {
        rl.check_and_record_at(addr(i), start).unwrap();
    }
    assert_eq!(rl.tracked_clients(), 10);

    rl.check_and_record_at(addr(200), start + Duration::from_secs(601)).unwrap();
    assert_eq!(rl.tracked_clients(), 1);
}

#[test]
fn clones_share_counters() {
    let rl = limiter(1, 60);
    let other = rl.clone();
    let now = Instant::now();

    rl.check_and_record_at(addr(1), now).unwrap();
    assert!(other.check_and_record_at(addr(1), now).is_err());
}
