pub mod argb;
pub mod io;
pub mod traits;

pub use self::argb::PixelBuffer;
pub use self::traits::{ImageView, Rows};
