pub mod error;
pub mod persistence;
pub mod configuration;
pub mod visualization;
pub mod telemetry;

pub use error::{IoError, IoResult, RecordError, WrapError};

pub use persistence::record::{BodyKind, BodyRecord, NVec2, FIELDS, TOKENS_PER_RECORD};
pub use persistence::parser::{parse_line, parse_record};
pub use persistence::diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink, TracingSink, CollectingSink};
pub use persistence::loader::{load, LinePolicy, ScenarioLoader};
pub use persistence::writer::{format_record, save, validate_records, write_records, ScenarioWriter, DEFAULT_PRECISION};
pub use persistence::statistics::{clear_log, log_tick, StatisticsLog, DEFAULT_STATS_PATH};

pub use configuration::config::{IoConfig, LoaderConfig, WriterConfig, StatisticsConfig};

pub use visualization::drawable::{DrawableBody, DrawableWrapper, PlainWrapper, Wrapper};

pub use telemetry::plot::{Axis, PlotSurface, PointStyle, ScatterPlot, ScatterPoint};
pub use telemetry::sampler::{Sample, SampleCollector};
