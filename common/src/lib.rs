mod constants;
mod descriptor;

pub use constants::DEFAULT_DESCRIPTOR_PATH;
pub use descriptor::{GlobalDescriptor, RoutesDescriptor, UiDescriptor};
