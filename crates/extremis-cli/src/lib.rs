pub mod gauss;
pub mod taylor;
pub mod util;
