use crate::telemetry::LogLevel;

const DEFAULT_SCROLL_THROTTLE_MS: u32 = 16;
const DEFAULT_RESIZE_THROTTLE_MS: u32 = 250;
const DEFAULT_NOTIFICATION_MS: u32 = 4_000;
const DEFAULT_SUBMIT_LATENCY_MS: u32 = 1_500;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const SCROLL_THROTTLE_MS_BOUNDS: (u32, u32) = (1, 1_000);
const RESIZE_THROTTLE_MS_BOUNDS: (u32, u32) = (16, 5_000);
const NOTIFICATION_MS_BOUNDS: (u32, u32) = (500, 60_000);
const SUBMIT_LATENCY_MS_BOUNDS: (u32, u32) = (0, 30_000);

pub const SCROLL_THROTTLE_ATTR: &str = "data-scroll-throttle-ms";
pub const RESIZE_THROTTLE_ATTR: &str = "data-resize-throttle-ms";
pub const NOTIFICATION_ATTR: &str = "data-notification-ms";
pub const SUBMIT_LATENCY_ATTR: &str = "data-submit-latency-ms";
pub const LOG_LEVEL_ATTR: &str = "data-log-level";

/// Timing and logging knobs, read once from the mount element.
#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
    pub scroll_throttle_ms: u32,
    pub resize_throttle_ms: u32,
    pub notification_ms: u32,
    pub submit_latency_ms: u32,
    pub log_level: LogLevel,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            scroll_throttle_ms: DEFAULT_SCROLL_THROTTLE_MS,
            resize_throttle_ms: DEFAULT_RESIZE_THROTTLE_MS,
            notification_ms: DEFAULT_NOTIFICATION_MS,
            submit_latency_ms: DEFAULT_SUBMIT_LATENCY_MS,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

/// An attribute that was present but rejected, so its default was used.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IgnoredAttribute {
    pub name: &'static str,
    pub value: String,
}

impl PageConfig {
    pub fn from_attributes(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<IgnoredAttribute>) {
        let mut ignored = Vec::new();

        let scroll_throttle_ms = parse_attr_u32_with_bounds(
            &lookup,
            SCROLL_THROTTLE_ATTR,
            DEFAULT_SCROLL_THROTTLE_MS,
            SCROLL_THROTTLE_MS_BOUNDS,
            &mut ignored,
        );
        let resize_throttle_ms = parse_attr_u32_with_bounds(
            &lookup,
            RESIZE_THROTTLE_ATTR,
            DEFAULT_RESIZE_THROTTLE_MS,
            RESIZE_THROTTLE_MS_BOUNDS,
            &mut ignored,
        );
        let notification_ms = parse_attr_u32_with_bounds(
            &lookup,
            NOTIFICATION_ATTR,
            DEFAULT_NOTIFICATION_MS,
            NOTIFICATION_MS_BOUNDS,
            &mut ignored,
        );
        let submit_latency_ms = parse_attr_u32_with_bounds(
            &lookup,
            SUBMIT_LATENCY_ATTR,
            DEFAULT_SUBMIT_LATENCY_MS,
            SUBMIT_LATENCY_MS_BOUNDS,
            &mut ignored,
        );
        let log_level = parse_log_level(&lookup, &mut ignored);

        (
            Self {
                scroll_throttle_ms,
                resize_throttle_ms,
                notification_ms,
                submit_latency_ms,
                log_level,
            },
            ignored,
        )
    }
}

fn parse_attr_non_empty_string(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_attr_u32_with_bounds(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: u32,
    bounds: (u32, u32),
    ignored: &mut Vec<IgnoredAttribute>,
) -> u32 {
    let Some(raw) = parse_attr_non_empty_string(lookup, name) else {
        return default;
    };

    match raw
        .parse::<u32>()
        .ok()
        .filter(|value| (bounds.0..=bounds.1).contains(value))
    {
        Some(value) => value,
        None => {
            ignored.push(IgnoredAttribute { name, value: raw });
            default
        }
    }
}

fn parse_log_level(
    lookup: &impl Fn(&str) -> Option<String>,
    ignored: &mut Vec<IgnoredAttribute>,
) -> LogLevel {
    let Some(raw) = parse_attr_non_empty_string(lookup, LOG_LEVEL_ATTR) else {
        return DEFAULT_LOG_LEVEL;
    };

    LogLevel::parse(&raw).unwrap_or_else(|| {
        ignored.push(IgnoredAttribute {
            name: LOG_LEVEL_ATTR,
            value: raw,
        });
        DEFAULT_LOG_LEVEL
    })
}
