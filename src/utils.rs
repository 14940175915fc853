//! Utility functions

// Sprout mark used for the sidebar logo and the window/taskbar icon
pub const LOGO_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 128 128"><rect x="6" y="6" width="116" height="116" rx="26" fill="#065f46"/><path d="M64 104V60" stroke="#ecfdf5" stroke-width="7" stroke-linecap="round" fill="none"/><path d="M64 62C62 42 46 30 26 30c2 20 18 32 38 32z" fill="#34d399"/><path d="M64 62c2-20 18-32 38-32-2 20-18 32-38 32z" fill="#a7f3d0"/></svg>"##;

/// Rasterize the logo SVG to a square RGBA image of the given size.
pub fn rasterize_logo(size: u32) -> (Vec<u8>, u32, u32) {
    let tree = resvg::usvg::Tree::from_str(LOGO_SVG, &resvg::usvg::Options::default()).unwrap();
    let scale = size as f32 / tree.size().width();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size).unwrap();
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    (premul_to_straight(&pixmap), size, size)
}

fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logo_rasterizes_at_icon_size() {
        let (pixels, w, h) = rasterize_logo(64);
        assert_eq!((w, h), (64, 64));
        assert_eq!(pixels.len(), 64 * 64 * 4);
        // the mark is opaque somewhere near the center
        let mid = (64 * 32 + 32) * 4;
        assert_eq!(pixels[mid + 3], 255);
    }
}
