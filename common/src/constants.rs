use std::time::Duration;

/// TCP port probed on every candidate host.
pub const RTSP_PORT: u16 = 554;

/// Upper bound for a single connect attempt.
pub const SCAN_TIMEOUT: Duration = Duration::from_millis(500);

/// Last octets swept inside a subnet prefix (`.1` through `.254`).
pub const FIRST_HOST: u8 = 1;
pub const LAST_HOST: u8 = 254;

/// Stream path appended to every rewritten source URL.
pub const STREAM_PATH: &str = "h264/ch1/main/av_stream";

/// Used only when the document carries no source URL to take credentials from.
pub const DEFAULT_CREDENTIALS: &str = "admin:admin";

/// Reported as the local address when no LAN interface is available.
pub const FALLBACK_ADDRESS: &str = "127.0.0.1";

pub const DEFAULT_CONFIG_PATH: &str = "/usr/local/etc/mediamtx.yml";
pub const DEFAULT_RELAY_PROGRAM: &str = "mediamtx";
