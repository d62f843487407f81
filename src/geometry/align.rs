//! Content alignment within a container.

use super::Shape;

/// Fit content of the given intrinsic dimensions inside `container`,
/// positioned by a numpad-style alignment code.
///
/// The content keeps its aspect ratio and fully spans the limiting axis of
/// the container; the alignment code offsets it along the other axis (1-3 at
/// the bottom, 7-9 at the top, 1/4/7 on the left, 3/6/9 on the right, 5
/// centered). Codes outside 1..=9 are clamped.
///
/// Pure function: the container is not mutated, a positioned shape is
/// returned for the caller to apply.
pub fn resolve_align(container: &Shape, content_w: f64, content_h: f64, align: u8) -> Shape {
    if content_w <= 0.0 || content_h <= 0.0 || container.width <= 0 || container.height <= 0 {
        log::warn!(
            "Degenerate dimensions (content {}x{}, container {}x{}), leaving container as is",
            content_w,
            content_h,
            container.width,
            container.height
        );
        return container.clone();
    }

    let align = align.clamp(1, 9);
    let fx = ((align - 1) % 3) as f64 * 0.5;
    let fy = 1.0 - ((align - 1) / 3) as f64 * 0.5;

    let container_ratio = container.width as f64 / container.height as f64;
    let content_ratio = content_w / content_h;

    let mut resolved = container.clone();
    if content_ratio < container_ratio {
        // Content is relatively narrower: span the full height and slide
        // horizontally into position.
        let new_width = container.height as f64 * content_ratio;
        resolved.left = container.left + ((container.width as f64 - new_width) * fx) as i64;
        resolved.width = new_width as i64;
    } else {
        // Content is relatively wider: span the full width and slide
        // vertically into position.
        let new_height = container.width as f64 / content_ratio;
        resolved.top = container.top + ((container.height as f64 - new_height) * fy) as i64;
        resolved.height = new_height as i64;
    }
    resolved
}
