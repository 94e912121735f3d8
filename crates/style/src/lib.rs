pub mod color;
pub mod font;
pub mod text;
pub mod dimension;
pub mod record;
pub mod parsers;

pub use color::ColorValue;
pub use font::FontWeight;
pub use text::TextAlign;
pub use dimension::{BoxEdges, BoxSpec, EdgeValue, Length, LengthUnit, SizeValue};
pub use record::StyleRecord;
pub use parsers::StyleParseError;
