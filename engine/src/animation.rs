/// 기본 애니메이션 주기 (ms)
pub const DEFAULT_PERIOD_MS: u32 = 500;
/// 기본 최대 확대 배율
pub const DEFAULT_PEAK_SCALE: f64 = 1.3;

/// 주기 타이머를 제공하는 쪽 (브라우저에서는 setInterval)
pub trait Scheduler {
    type Handle;
    type Error;

    /// `period_ms`마다 `tick` 실행
    fn every(&mut self, period_ms: u32, tick: Box<dyn FnMut()>) -> Result<Self::Handle, Self::Error>;

    fn cancel(&mut self, handle: Self::Handle);
}

/// 동시에 최대 하나의 주기만 돌리는 애니메이션 제어기
///
/// 타이머 핸들은 여기서만 소유하고, `start`/`stop`만 바꾼다.
pub struct Animator<S: Scheduler> {
    scheduler: S,
    period_ms: u32,
    active: Option<S::Handle>,
}

impl<S: Scheduler> Animator<S> {
    pub fn new(scheduler: S, period_ms: u32) -> Self {
        Self {
            scheduler,
            period_ms,
            active: None,
        }
    }

    /// 이전 주기를 항상 먼저 끄고 새 주기를 시작
    pub fn start(&mut self, tick: Box<dyn FnMut()>) -> Result<(), S::Error> {
        self.stop();
        let handle = self.scheduler.every(self.period_ms, tick)?;
        self.active = Some(handle);
        log::debug!("animation started ({} ms)", self.period_ms);
        Ok(())
    }

    /// 돌던 주기가 있었으면 true
    pub fn stop(&mut self) -> bool {
        match self.active.take() {
            Some(handle) => {
                self.scheduler.cancel(handle);
                log::debug!("animation stopped");
                true
            }
            None => false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}

/// 기물 맥박 효과 상태. tick마다 1.0 과 peak 사이를 오간다
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pulse {
    peak: f64,
    scale: f64,
}

impl Default for Pulse {
    fn default() -> Self {
        Self::new(DEFAULT_PEAK_SCALE)
    }
}

impl Pulse {
    pub fn new(peak: f64) -> Self {
        Self { peak, scale: 1.0 }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// 다음 배율로 넘어가고 그 값을 반환
    pub fn advance(&mut self) -> f64 {
        self.scale = if self.scale == 1.0 { self.peak } else { 1.0 };
        self.scale
    }

    /// CSS transform 값
    pub fn transform(&self) -> String {
        format!("scale({})", self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::BTreeMap;
    use std::rc::Rc;

    /// 살아있는 타이머를 기록하는 가짜 스케줄러
    #[derive(Default)]
    struct FakeScheduler {
        next_id: u32,
        live: BTreeMap<u32, Box<dyn FnMut()>>,
    }

    impl FakeScheduler {
        fn fire_all(&mut self) {
            for tick in self.live.values_mut() {
                tick();
            }
        }
    }

    impl Scheduler for FakeScheduler {
        type Handle = u32;
        type Error = String;

        fn every(&mut self, _period_ms: u32, tick: Box<dyn FnMut()>) -> Result<u32, String> {
            self.next_id += 1;
            self.live.insert(self.next_id, tick);
            Ok(self.next_id)
        }

        fn cancel(&mut self, handle: u32) {
            self.live.remove(&handle);
        }
    }

    struct FailingScheduler;

    impl Scheduler for FailingScheduler {
        type Handle = ();
        type Error = String;

        fn every(&mut self, _period_ms: u32, _tick: Box<dyn FnMut()>) -> Result<(), String> {
            Err("타이머 생성 실패".to_string())
        }

        fn cancel(&mut self, _handle: ()) {}
    }

    #[test]
    fn test_restart_keeps_single_cycle() {
        let mut animator = Animator::new(FakeScheduler::default(), DEFAULT_PERIOD_MS);
        animator.start(Box::new(|| {})).unwrap();
        animator.start(Box::new(|| {})).unwrap();
        assert!(animator.is_running());
        assert_eq!(animator.scheduler().live.len(), 1);
        assert!(animator.scheduler().live.contains_key(&2));
    }

    #[test]
    fn test_only_latest_tick_runs() {
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let mut animator = Animator::new(FakeScheduler::default(), DEFAULT_PERIOD_MS);

        let counter = first.clone();
        animator.start(Box::new(move || counter.set(counter.get() + 1))).unwrap();
        let counter = second.clone();
        animator.start(Box::new(move || counter.set(counter.get() + 1))).unwrap();

        animator.scheduler.fire_all();
        animator.scheduler.fire_all();
        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 2);
    }

    #[test]
    fn test_stop() {
        let mut animator = Animator::new(FakeScheduler::default(), DEFAULT_PERIOD_MS);
        assert!(!animator.stop());
        animator.start(Box::new(|| {})).unwrap();
        assert!(animator.stop());
        assert!(!animator.is_running());
        assert!(animator.scheduler().live.is_empty());
    }

    #[test]
    fn test_failed_start_leaves_animator_idle() {
        let mut animator = Animator::new(FailingScheduler, DEFAULT_PERIOD_MS);
        assert!(animator.start(Box::new(|| {})).is_err());
        assert!(!animator.is_running());
    }

    #[test]
    fn test_pulse_toggles() {
        let mut pulse = Pulse::default();
        assert_eq!(pulse.scale(), 1.0);
        assert_eq!(pulse.advance(), 1.3);
        assert_eq!(pulse.transform(), "scale(1.3)");
        assert_eq!(pulse.advance(), 1.0);
        assert_eq!(pulse.transform(), "scale(1)");
    }
}
