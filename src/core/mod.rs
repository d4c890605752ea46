pub mod color;
pub mod dataset_store;
pub mod grid_snapshot;
pub mod scale;
pub mod series;
pub mod smoothing;
pub mod style;
pub mod value;

pub use color::Color;
pub use dataset_store::{ColorTarget, ColumnSelection, DatasetStore};
pub use grid_snapshot::{GridCell, GridRow, GridSnapshot};
pub use scale::{LinearScale, Viewport, scale_from_extent};
pub use series::Series;
pub use smoothing::{SMOOTH_SAMPLE_COUNT, SamplePoint, smooth_series};
pub use style::{
    ChartStyle, LineStyle, MarkerShape, PlotKinds, SeriesStyle, TickDirection, default_line_color,
    default_point_color,
};
pub use value::CellValue;
