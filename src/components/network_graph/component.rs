use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::frame_loop::FrameLoop;
use super::legend::{GraphLegend, legend_entries};
use super::render;
use super::state::ForceGraphState;
use crate::api::{ApiConfig, NetworkPayload, Symbol};
use crate::components::canvas::{context_2d, fit_to_parent, pointer_position};
use crate::components::symbol_details::use_symbol_details;
use crate::components::tooltip::{Tooltip, TooltipOverlay};
use crate::widget::{Load, Widget};

const DEFAULT_WIDTH: f64 = 800.0;

type Shared<T> = Rc<RefCell<Option<T>>>;

/// Force-directed symbol network drawn on a canvas.
#[component]
pub fn NetworkGraph(#[prop(default = 500.0)] height: f64) -> impl IntoView {
	let api = expect_context::<ApiConfig>();
	let details = use_symbol_details();
	let network = Widget::<NetworkPayload>::new("network graph");
	log::info!("initializing network graph");
	network.dispatch(async move { api.network().await });

	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let tooltip = Tooltip::default();
	let state: Shared<ForceGraphState> = Rc::new(RefCell::new(None));
	let ctx: Shared<CanvasRenderingContext2d> = Rc::new(RefCell::new(None));
	let frames: Rc<RefCell<FrameLoop<Closure<dyn FnMut()>>>> =
		Rc::new(RefCell::new(FrameLoop::default()));
	let (state_init, ctx_init, frames_init) = (state.clone(), ctx.clone(), frames.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let Some(data) = network.load.with(|load| load.populated().cloned()) else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (w, h) = fit_to_parent(&canvas, DEFAULT_WIDTH, height);
		let Some(context) = context_2d(&canvas) else {
			log::error!("network graph: 2d context unavailable");
			return;
		};
		log::info!(
			"network graph: laying out {} nodes, {} links",
			data.nodes.len(),
			data.links.len()
		);
		*state_init.borrow_mut() = Some(ForceGraphState::new(&data, w, h));
		*ctx_init.borrow_mut() = Some(context);

		let Some(window) = web_sys::window() else {
			return;
		};
		let mut frames = frames_init.borrow_mut();
		if frames.is_stopped() {
			return;
		}

		if frames.resize().is_none() {
			let (state_resize, canvas_resize) = (state_init.clone(), canvas.clone());
			let callback = Closure::<dyn FnMut()>::new(move || {
				let (nw, nh) = fit_to_parent(&canvas_resize, DEFAULT_WIDTH, height);
				if let Some(ref mut s) = *state_resize.borrow_mut() {
					s.resize(nw, nh);
				}
			});
			let _ = window
				.add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref());
			frames.set_resize(callback);
		}

		// one animation loop per component; later payloads only swap the state
		if frames.animate().is_some() {
			return;
		}
		let (state_anim, ctx_anim, frames_anim) =
			(state_init.clone(), ctx_init.clone(), frames_init.clone());
		let callback = Closure::<dyn FnMut()>::new(move || {
			if !canvas.is_connected() {
				log::debug!("network graph: canvas detached, stopping animation");
				frames_anim.borrow_mut().halt();
				return;
			}
			if let (Some(s), Some(ctx)) =
				(state_anim.borrow_mut().as_mut(), ctx_anim.borrow().as_ref())
			{
				s.tick(0.016);
				render::render(s, ctx);
			}
			let Some(window) = web_sys::window() else {
				return;
			};
			let mut frames = frames_anim.borrow_mut();
			let frame = frames
				.animate()
				.and_then(|cb| window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
			frames.set_frame(frame);
		});
		let frame = window
			.request_animation_frame(callback.as_ref().unchecked_ref())
			.ok();
		frames.set_animate(callback);
		frames.set_frame(frame);
	});

	let teardown = StoredValue::new_local(frames);
	on_cleanup(move || {
		let Some(frames) = teardown.try_get_value() else {
			return;
		};
		let released = frames.borrow_mut().stop();
		if let Some(window) = web_sys::window() {
			if let Some(frame) = released.frame {
				let _ = window.cancel_animation_frame(frame);
			}
			if let Some(ref cb) = released.resize {
				let _ = window
					.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}
		log::debug!("network graph: animation loop released");
	});

	let position = move |ev: &MouseEvent| -> Option<(f64, f64)> {
		let canvas: HtmlCanvasElement = canvas_ref.get_untracked()?.into();
		Some(pointer_position(&canvas, ev))
	};

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = position(&ev) else {
			return;
		};
		if let Some(ref mut s) = *state_md.borrow_mut() {
			match s.node_at_position(x, y) {
				Some(idx) => s.begin_drag(idx, x, y),
				None => s.begin_pan(x, y),
			}
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = position(&ev) else {
			return;
		};
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			if s.drag.active {
				s.drag_to(x, y);
				tooltip.move_to(ev.client_x() as f64, ev.client_y() as f64);
				return;
			}
			s.pan_to(x, y);

			let target = s.target_at(x, y);
			s.set_hover(target);
			match s.tooltip() {
				Some(content) => {
					tooltip.show(content, ev.client_x() as f64, ev.client_y() as f64)
				}
				None => tooltip.hide(),
			}
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		let clicked = state_mu.borrow_mut().as_mut().and_then(|s| {
			let clicked = s.end_drag().and_then(|idx| s.node_info(idx));
			s.release();
			clicked
		});
		if let Some(info) = clicked {
			details.show(Symbol::from(&info.symbol));
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.release();
			s.set_hover(None);
		}
		tooltip.hide();
	};

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let mouse: &MouseEvent = &ev;
		let Some((x, y)) = position(mouse) else {
			return;
		};
		if let Some(ref mut s) = *state_wh.borrow_mut() {
			s.zoom_at(x, y, ev.delta_y());
		}
	};

	let legend = Signal::derive(move || {
		network
			.load
			.with(|load| load.populated().map(|data| legend_entries(&data.nodes)))
			.unwrap_or_default()
	});

	let failure = move || match network.load.get() {
		Load::Failed(err) => Some(view! {
			<div class="alert alert-danger">"Error loading network data: " {err}</div>
		}),
		_ => None,
	};
	let failed = move || network.load.with(|load| matches!(load, Load::Failed(_)));

	view! {
		<div id="networkGraph" class="network-graph">
			{failure}
			<div
				class="network-canvas"
				style:display=move || if failed() { "none" } else { "block" }
				style="position: relative;"
			>
				{move || {
					network
						.load
						.with(Load::is_loading)
						.then(|| view! { <div class="chart-loading">"Loading..."</div> })
				}}
				<canvas
					node_ref=canvas_ref
					class="force-graph-canvas"
					on:mousedown=on_mousedown
					on:mousemove=on_mousemove
					on:mouseup=on_mouseup
					on:mouseleave=on_mouseleave
					on:wheel=on_wheel
					style="display: block; cursor: grab;"
				/>
				<GraphLegend entries=legend />
			</div>
			<TooltipOverlay tooltip=tooltip />
		</div>
	}
}
