use lava_core::PointerSignal;
use web_sys as web;

/// Pointer position relative to `area`, normalized to [0,1] with a top origin.
#[inline]
pub fn normalized_in(ev: &web::MouseEvent, area: &web::Element) -> (f32, f32) {
    let rect = area.get_bounding_client_rect();
    let w = rect.width() as f32;
    let h = rect.height() as f32;
    if w > 0.0 && h > 0.0 {
        let x = (ev.client_x() as f32 - rect.left() as f32) / w;
        let y = (ev.client_y() as f32 - rect.top() as f32) / h;
        (x, y)
    } else {
        (0.5, 0.5)
    }
}

#[inline]
pub fn pointer_signal(ev: &web::MouseEvent, area: &web::Element, inside: bool) -> PointerSignal {
    let (normalized_x, normalized_y) = normalized_in(ev, area);
    PointerSignal {
        inside,
        normalized_x,
        normalized_y,
    }
}
