pub mod campaigns;
pub mod ui;

pub use campaigns::*;
pub use ui::*;
