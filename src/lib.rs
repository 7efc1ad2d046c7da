pub mod boxshadow;
pub mod iplookup;
pub mod password;
pub mod qr;
pub mod readme;

pub use boxshadow::{BoxShadow, hex_to_rgba};
pub use iplookup::{IpInfo, lookup, parse_ip};
pub use password::{GenerationConfig, RandomSource, generate, generate_with};
pub use qr::{render_svg, write_svg};
pub use readme::{Section, Template, assemble};
