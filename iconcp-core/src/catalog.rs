//! The fixed icon catalog

/// Pixel sizes of the icon set, in processing order.
pub const ICON_SIZES: [u32; 8] = [72, 96, 128, 144, 152, 192, 384, 512];

/// File name of the square icon with the given edge length.
pub fn icon_file_name(size: u32) -> String {
    format!("icon-{size}x{size}.png")
}
