use engine::{Animator, Pulse, Scheduler};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use crate::config::WidgetConfig;
use crate::dom;
use crate::error::WidgetError;

/// setInterval 기반 스케줄러
pub struct BrowserScheduler {
    window: Window,
}

/// 살아있는 interval. 취소할 때 클로저도 같이 해제된다
pub struct Interval {
    id: i32,
    _tick: Closure<dyn FnMut()>,
}

impl BrowserScheduler {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Scheduler for BrowserScheduler {
    type Handle = Interval;
    type Error = WidgetError;

    fn every(&mut self, period_ms: u32, tick: Box<dyn FnMut()>) -> Result<Interval, WidgetError> {
        let tick = Closure::wrap(tick);
        let id = self.window.set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            period_ms as i32,
        )?;
        Ok(Interval { id, _tick: tick })
    }

    fn cancel(&mut self, handle: Interval) {
        self.window.clear_interval_with_handle(handle.id);
    }
}

/// 기물 맥박 애니메이션 (pulse / reset 버튼)
pub struct PieceAnimation {
    animator: Animator<BrowserScheduler>,
    document: Document,
    selector: String,
    peak: f64,
    transition: String,
}

impl PieceAnimation {
    pub fn new(window: Window, document: Document, config: &WidgetConfig) -> Self {
        Self {
            animator: Animator::new(BrowserScheduler::new(window), config.pulse_period_ms),
            document,
            selector: config.piece_selector.clone(),
            peak: config.pulse_scale,
            transition: config.pulse_transition.clone(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.animator.is_running()
    }

    /// 새 주기 시작. 돌던 주기는 먼저 멈춘다
    pub fn pulse(&mut self) -> Result<(), WidgetError> {
        let pieces = dom::query_all(&self.document, &self.selector)?;
        let transition = self.transition.clone();
        let mut pulse = Pulse::new(self.peak);
        let tick = move || {
            pulse.advance();
            let transform = pulse.transform();
            for piece in &pieces {
                if let Err(err) = apply(piece, &transform, &transition) {
                    log::warn!("애니메이션 적용 실패: {}", err);
                }
            }
        };
        self.animator.start(Box::new(tick))
    }

    /// 주기를 멈추고 기물 스타일을 원래대로
    pub fn reset(&mut self) -> Result<(), WidgetError> {
        self.animator.stop();
        for piece in dom::query_all(&self.document, &self.selector)? {
            let style = piece.style();
            style.remove_property("transform")?;
            style.remove_property("transition")?;
        }
        Ok(())
    }
}

fn apply(piece: &HtmlElement, transform: &str, transition: &str) -> Result<(), WidgetError> {
    let style = piece.style();
    style.set_property("transform", transform)?;
    style.set_property("transition", transition)?;
    Ok(())
}
