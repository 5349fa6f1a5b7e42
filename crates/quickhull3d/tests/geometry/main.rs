mod common;
mod degenerate;
mod half_edge_mesh;
mod settings;
#[cfg(feature = "wavefront")]
mod wavefront;
