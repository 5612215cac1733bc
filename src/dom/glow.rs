use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};

use crate::core::Vec2;
use crate::systems::glow::GlowFollower;

/// Make the element with `element_id` trail the cursor for the rest of the
/// page's life. A missing element is not an error; the page simply has no glow.
#[wasm_bindgen]
pub fn start_ambient_glow(element_id: &str) -> Result<(), JsValue> {
    let window = super::window()?;
    let document = super::document(&window)?;

    let Some(el) = document.get_element_by_id(element_id) else {
        console_warn!("ambient glow: #{} not found", element_id);
        return Ok(());
    };
    let el: HtmlElement = el.dyn_into()?;

    let (width, height) = super::viewport_size(&window)?;
    let follower = Rc::new(RefCell::new(GlowFollower::new(Vec2::new(width, height))));

    {
        let follower = follower.clone();
        let on_move = Closure::wrap(Box::new(move |e: MouseEvent| {
            follower
                .borrow_mut()
                .set_cursor(e.client_x() as f32, e.client_y() as f32);
        }) as Box<dyn FnMut(MouseEvent)>);
        document.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
        // Lives as long as the page
        on_move.forget();
    }

    super::run_frame_loop(&window, move || {
        let mut glow = follower.borrow_mut();
        glow.tick();
        let offset = glow.translation();
        if let Err(e) = el
            .style()
            .set_property("transform", &format!("translate({}px, {}px)", offset.x, offset.y))
        {
            console_warn!("ambient glow stopped: {:?}", e);
            return false;
        }
        true
    })
}
