pub mod colormap;
pub mod frame;
pub mod trip;
pub mod tripmap_error;
