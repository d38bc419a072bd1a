pub mod error;
pub mod feed;
pub mod mapper;
pub mod palette;
pub mod range;
pub mod session;
pub mod window;

pub use error::{ConfigError, FeedError};
pub use feed::{FileFeed, LiveFeed, RateGate, SampleFeed, TokenScanner};
pub use mapper::PlotMapper;
pub use palette::ChartColor;
pub use range::RangeTracker;
pub use session::ChartSession;
pub use window::RollingWindow;
