pub use self::generators::{generate_ball, generate_sphere_surface};

mod generators;
