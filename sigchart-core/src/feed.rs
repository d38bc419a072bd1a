use std::fs::File;
use std::io::{self, BufRead, BufReader, StdinLock};
use std::path::Path;
use std::time::{Duration, Instant};

use crate::error::FeedError;

/// One attempt to obtain the next sample. The two implementations (live
/// stream and file) are selected once at startup; the event loop only sees
/// this capability.
pub trait SampleFeed {
    /// Polls for one sample. `Ok(None)` means nothing was accepted this
    /// iteration: the source was not ready, sampling is paused or
    /// rate-limited, the next token failed to parse, or the stream ended.
    fn poll(&mut self, now: Instant, paused: bool) -> io::Result<Option<f64>>;
}

/// Incremental reader of whitespace-delimited ASCII tokens.
#[derive(Debug)]
pub struct TokenScanner<R> {
    reader: R,
    pending: bool,
}

impl<R: BufRead> TokenScanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: false,
        }
    }

    /// Whether token bytes are known to sit unread in the buffer. The live
    /// feed checks this so buffered tokens are not missed by the
    /// file-descriptor readiness probe.
    pub fn has_pending(&self) -> bool {
        self.pending
    }

    /// Reads the next token, blocking until one is complete or the stream
    /// ends. `None` means end of input.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        let mut token = String::new();
        loop {
            let (used, done) = {
                let buf = self.reader.fill_buf()?;
                if buf.is_empty() {
                    self.pending = false;
                    return Ok(if token.is_empty() { None } else { Some(token) });
                }
                let mut used = 0;
                let mut done = false;
                for &byte in buf {
                    used += 1;
                    if byte.is_ascii_whitespace() {
                        if token.is_empty() {
                            continue;
                        }
                        done = true;
                        break;
                    }
                    token.push(byte as char);
                }
                self.pending = done && buf[used..].iter().any(|b| !b.is_ascii_whitespace());
                (used, done)
            };
            self.reader.consume(used);
            if done {
                return Ok(Some(token));
            }
        }
    }
}

/// Parses one token as a sample value. Unparseable tokens are dropped without
/// touching any state.
fn parse_sample(token: &str) -> Option<f64> {
    match token.parse::<f64>() {
        Ok(value) => Some(value),
        Err(_) => {
            log::debug!("dropping unparseable sample token {token:?}");
            None
        }
    }
}

/// Best-effort minimum spacing between accepted live samples.
///
/// Comparisons use a monotonic clock at whatever granularity the platform
/// provides; this is pacing, not a precise timer.
pub struct RateGate {
    interval: Duration,
    last: Option<Instant>,
}

impl RateGate {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    pub fn ready(&self, now: Instant) -> bool {
        match self.last {
            Some(last) => now.duration_since(last) >= self.interval,
            None => true,
        }
    }

    pub fn mark(&mut self, now: Instant) {
        self.last = Some(now);
    }
}

#[cfg(unix)]
fn stdin_ready() -> bool {
    let mut fds = libc::pollfd {
        fd: libc::STDIN_FILENO,
        events: libc::POLLIN,
        revents: 0,
    };
    let ret = unsafe { libc::poll(&mut fds, 1, 0) };
    ret > 0 && fds.revents & (libc::POLLIN | libc::POLLHUP) != 0
}

#[cfg(not(unix))]
fn stdin_ready() -> bool {
    // No zero-timeout probe available; fall back to a blocking read.
    true
}

/// Live-stream feed over stdin: readiness-probed, rate-limited and pausable.
pub struct LiveFeed {
    scanner: TokenScanner<StdinLock<'static>>,
    gate: RateGate,
}

impl LiveFeed {
    pub fn new(interval: Duration) -> Self {
        Self {
            scanner: TokenScanner::new(io::stdin().lock()),
            gate: RateGate::new(interval),
        }
    }
}

impl SampleFeed for LiveFeed {
    fn poll(&mut self, now: Instant, paused: bool) -> io::Result<Option<f64>> {
        if paused || !self.gate.ready(now) {
            return Ok(None);
        }
        if !self.scanner.has_pending() && !stdin_ready() {
            return Ok(None);
        }
        // The gate restarts on every read attempt, parseable or not.
        self.gate.mark(now);
        match self.scanner.next_token()? {
            Some(token) => Ok(parse_sample(&token)),
            None => Ok(None),
        }
    }
}

/// File feed: one blocking read attempt per iteration, no pacing; pausing
/// has no effect.
#[derive(Debug)]
pub struct FileFeed {
    scanner: TokenScanner<BufReader<File>>,
}

impl FileFeed {
    /// Opens `path` for reading. Failure here is fatal at startup, before
    /// any window exists.
    pub fn open(path: &Path) -> Result<Self, FeedError> {
        let file = File::open(path).map_err(|source| FeedError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            scanner: TokenScanner::new(BufReader::new(file)),
        })
    }
}

impl SampleFeed for FileFeed {
    fn poll(&mut self, _now: Instant, _paused: bool) -> io::Result<Option<f64>> {
        match self.scanner.next_token()? {
            Some(token) => Ok(parse_sample(&token)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_sample, RateGate, TokenScanner};
    use std::io::Cursor;
    use std::time::{Duration, Instant};

    #[test]
    fn scanner_splits_on_any_whitespace() {
        let mut scanner = TokenScanner::new(Cursor::new("1.0  -2.5\t3e2\n4"));
        assert_eq!(scanner.next_token().unwrap().as_deref(), Some("1.0"));
        assert_eq!(scanner.next_token().unwrap().as_deref(), Some("-2.5"));
        assert_eq!(scanner.next_token().unwrap().as_deref(), Some("3e2"));
        assert_eq!(scanner.next_token().unwrap().as_deref(), Some("4"));
        assert_eq!(scanner.next_token().unwrap(), None);
    }

    #[test]
    fn scanner_returns_trailing_token_without_delimiter() {
        let mut scanner = TokenScanner::new(Cursor::new("7.5"));
        assert_eq!(scanner.next_token().unwrap().as_deref(), Some("7.5"));
        assert_eq!(scanner.next_token().unwrap(), None);
    }

    #[test]
    fn scanner_reports_pending_input_between_tokens() {
        let mut scanner = TokenScanner::new(Cursor::new("1 2\n"));
        scanner.next_token().unwrap();
        assert!(scanner.has_pending());
        scanner.next_token().unwrap();
    }

    #[test]
    fn trailing_whitespace_does_not_count_as_pending() {
        let mut scanner = TokenScanner::new(Cursor::new("1 \n"));
        scanner.next_token().unwrap();
        assert!(!scanner.has_pending());
    }

    #[test]
    fn malformed_tokens_are_dropped() {
        assert_eq!(parse_sample("1.0"), Some(1.0));
        assert_eq!(parse_sample("xyz"), None);
        assert_eq!(parse_sample("1.0.0"), None);
        assert_eq!(parse_sample(""), None);
    }

    #[test]
    fn gate_with_zero_interval_is_always_ready() {
        let mut gate = RateGate::new(Duration::ZERO);
        let now = Instant::now();
        assert!(gate.ready(now));
        gate.mark(now);
        assert!(gate.ready(now));
    }

    #[test]
    fn gate_enforces_minimum_spacing() {
        let mut gate = RateGate::new(Duration::from_secs(1));
        let start = Instant::now();
        assert!(gate.ready(start));
        gate.mark(start);
        assert!(!gate.ready(start + Duration::from_millis(500)));
        assert!(gate.ready(start + Duration::from_secs(1)));
    }
}
