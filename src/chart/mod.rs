pub mod color;
pub mod series;

pub use color::Color;
pub use series::Point;
pub use series::Series;
