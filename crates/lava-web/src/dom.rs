use lava_core::LavaError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Container size in layout pixels (device pixel ratio fixed at 1).
#[inline]
pub fn container_size(container: &web::HtmlElement) -> (u32, u32) {
    let w = container.client_width().max(1) as u32;
    let h = container.client_height().max(1) as u32;
    (w, h)
}

/// Backing size and CSS size of the canvas, both in pixels.
pub fn size_canvas(canvas: &web::HtmlCanvasElement, width: u32, height: u32) {
    canvas.set_width(width.max(1));
    canvas.set_height(height.max(1));
    let style = canvas.style();
    let _ = style.set_property("width", &format!("{}px", width));
    let _ = style.set_property("height", &format!("{}px", height));
}

/// Append a fresh canvas to `container`, sized to it.
pub fn create_canvas(
    container: &web::HtmlElement,
) -> Result<web::HtmlCanvasElement, LavaError> {
    let document = window_document().ok_or_else(|| LavaError::Host("no document".into()))?;
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| LavaError::Host(format!("{:?}", e)))?
        .dyn_into()
        .map_err(|e| LavaError::Host(format!("{:?}", e)))?;
    let _ = canvas.style().set_property("display", "block");
    let (w, h) = container_size(container);
    size_canvas(&canvas, w, h);
    container
        .append_child(&canvas)
        .map_err(|e| LavaError::Host(format!("{:?}", e)))?;
    Ok(canvas)
}

/// Event listener registrations, removed again when dropped.
#[derive(Default)]
pub struct ListenerSet {
    entries: Vec<(web::EventTarget, &'static str, Closure<dyn FnMut(web::Event)>)>,
}

impl ListenerSet {
    pub fn add(
        &mut self,
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Result<(), LavaError> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| LavaError::Host(format!("{:?}", e)))?;
        self.entries.push((target.clone(), event, closure));
        Ok(())
    }
}

impl Drop for ListenerSet {
    fn drop(&mut self) {
        for (target, event, closure) in self.entries.drain(..) {
            // Target may already be detached; nothing to do about it here.
            let _ = target
                .remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        }
    }
}
