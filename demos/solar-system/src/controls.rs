/// Interaction controller: engine input events to state transitions.
///
/// The controller only tracks pointer-drag bookkeeping. Everything it decides
/// comes out as a [`Control`] for `SimulationState::apply`.

use glam::DVec2;
use orrery_engine::InputEvent;

// ── Custom event kinds from the UI layer ─────────────────────────────

/// Zoom slider moved. `a` = percent (0–500).
pub const CUSTOM_ZOOM_SLIDER: u32 = 1;
/// Speed slider moved. `a` = percent (0–500).
pub const CUSTOM_SPEED_SLIDER: u32 = 2;
/// Display checkbox changed. `a` = which (see [`Toggle`]), `b` = 0 off / 1 on.
pub const CUSTOM_TOGGLE: u32 = 3;
/// Reset-view button.
pub const CUSTOM_RESET_VIEW: u32 = 4;

/// Screen-pixel distance a press must travel before it counts as a drag.
pub const DRAG_THRESHOLD: f64 = 5.0;

/// Wheel factors: scrolling down zooms out.
pub const WHEEL_ZOOM_OUT: f64 = 0.9;
pub const WHEEL_ZOOM_IN: f64 = 1.1;

/// Display layers the UI can switch on and off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Orbits,
    Labels,
    Rings,
}

impl Toggle {
    /// Map a checkbox index. Anything but an exact 0, 1 or 2 is rejected.
    pub fn from_index(index: f32) -> Option<Self> {
        if !index.is_finite() || index.fract() != 0.0 {
            return None;
        }
        match index as i32 {
            0 => Some(Self::Orbits),
            1 => Some(Self::Labels),
            2 => Some(Self::Rings),
            _ => None,
        }
    }
}

/// A state transition produced from input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Control {
    /// Drag the view by a screen-space delta.
    Pan(DVec2),
    /// Zoom by `factor` around a screen point.
    ZoomAt { screen: DVec2, factor: f64 },
    /// Press and release without dragging, in screen pixels.
    Click(DVec2),
    SetZoomPercent(f64),
    SetSpeedPercent(f64),
    SetToggle(Toggle, bool),
    ResetView,
    /// New viewport size in screen pixels.
    Resize(DVec2),
}

#[derive(Debug, Clone, Copy)]
struct Press {
    start: DVec2,
    last: DVec2,
    dragging: bool,
}

/// Turns raw input into [`Control`]s, classifying presses as clicks or drags.
#[derive(Debug, Default)]
pub struct Controller {
    press: Option<Press>,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.press.is_some_and(|p| p.dragging)
    }

    pub fn handle(&mut self, event: &InputEvent) -> Option<Control> {
        match *event {
            InputEvent::PointerDown { x, y } => {
                let at = screen(x, y);
                self.press = Some(Press {
                    start: at,
                    last: at,
                    dragging: false,
                });
                None
            }
            InputEvent::PointerMove { x, y } => {
                let press = self.press.as_mut()?;
                let at = screen(x, y);
                if !press.dragging && at.distance(press.start) > DRAG_THRESHOLD {
                    press.dragging = true;
                }
                if !press.dragging {
                    return None;
                }
                let delta = at - press.last;
                press.last = at;
                Some(Control::Pan(delta))
            }
            InputEvent::PointerUp { x, y } => {
                let press = self.press.take()?;
                if press.dragging {
                    None
                } else {
                    Some(Control::Click(screen(x, y)))
                }
            }
            InputEvent::Wheel { x, y, delta } => {
                let factor = if delta > 0.0 { WHEEL_ZOOM_OUT } else { WHEEL_ZOOM_IN };
                Some(Control::ZoomAt {
                    screen: screen(x, y),
                    factor,
                })
            }
            InputEvent::Resize { width, height } => Some(Control::Resize(screen(width, height))),
            InputEvent::Custom { kind, a, b, .. } => match kind {
                CUSTOM_ZOOM_SLIDER => Some(Control::SetZoomPercent(a as f64)),
                CUSTOM_SPEED_SLIDER => Some(Control::SetSpeedPercent(a as f64)),
                CUSTOM_TOGGLE => match Toggle::from_index(a) {
                    Some(toggle) => Some(Control::SetToggle(toggle, b != 0.0)),
                    None => {
                        log::debug!("ignoring toggle with unknown index {a}");
                        None
                    }
                },
                CUSTOM_RESET_VIEW => Some(Control::ResetView),
                _ => {
                    log::debug!("ignoring custom event kind {kind}");
                    None
                }
            },
            InputEvent::KeyDown { .. } | InputEvent::KeyUp { .. } => None,
        }
    }
}

fn screen(x: f32, y: f32) -> DVec2 {
    DVec2::new(x as f64, y as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(controller: &mut Controller, events: &[InputEvent]) -> Vec<Control> {
        events.iter().filter_map(|e| controller.handle(e)).collect()
    }

    #[test]
    fn press_and_release_is_a_click() {
        let mut c = Controller::new();
        let out = feed(
            &mut c,
            &[
                InputEvent::PointerDown { x: 100.0, y: 100.0 },
                InputEvent::PointerMove { x: 102.0, y: 101.0 },
                InputEvent::PointerUp { x: 102.0, y: 101.0 },
            ],
        );
        assert_eq!(out, vec![Control::Click(DVec2::new(102.0, 101.0))]);
        assert!(!c.is_dragging());
    }

    #[test]
    fn drag_pans_by_incremental_deltas() {
        let mut c = Controller::new();
        let out = feed(
            &mut c,
            &[
                InputEvent::PointerDown { x: 100.0, y: 100.0 },
                InputEvent::PointerMove { x: 103.0, y: 100.0 },
                InputEvent::PointerMove { x: 110.0, y: 100.0 },
                InputEvent::PointerMove { x: 110.0, y: 120.0 },
            ],
        );
        // The first move stays under the threshold; the second pans from the press point.
        assert_eq!(
            out,
            vec![
                Control::Pan(DVec2::new(10.0, 0.0)),
                Control::Pan(DVec2::new(0.0, 20.0)),
            ]
        );
        assert!(c.is_dragging());

        // Releasing after a drag is not a click.
        assert_eq!(c.handle(&InputEvent::PointerUp { x: 110.0, y: 120.0 }), None);
        assert!(!c.is_dragging());
    }

    #[test]
    fn moves_without_a_press_are_ignored() {
        let mut c = Controller::new();
        let out = feed(
            &mut c,
            &[
                InputEvent::PointerMove { x: 10.0, y: 10.0 },
                InputEvent::PointerMove { x: 300.0, y: 300.0 },
                InputEvent::PointerUp { x: 300.0, y: 300.0 },
            ],
        );
        assert!(out.is_empty());
    }

    #[test]
    fn wheel_direction_picks_factor() {
        let mut c = Controller::new();
        assert_eq!(
            c.handle(&InputEvent::Wheel { x: 5.0, y: 6.0, delta: 120.0 }),
            Some(Control::ZoomAt { screen: DVec2::new(5.0, 6.0), factor: WHEEL_ZOOM_OUT })
        );
        assert_eq!(
            c.handle(&InputEvent::Wheel { x: 5.0, y: 6.0, delta: -120.0 }),
            Some(Control::ZoomAt { screen: DVec2::new(5.0, 6.0), factor: WHEEL_ZOOM_IN })
        );
    }

    #[test]
    fn custom_events_map_to_controls() {
        let mut c = Controller::new();
        let custom = |kind, a, b| InputEvent::Custom { kind, a, b, c: 0.0 };

        assert_eq!(c.handle(&custom(CUSTOM_ZOOM_SLIDER, 250.0, 0.0)), Some(Control::SetZoomPercent(250.0)));
        assert_eq!(c.handle(&custom(CUSTOM_SPEED_SLIDER, 0.0, 0.0)), Some(Control::SetSpeedPercent(0.0)));
        assert_eq!(
            c.handle(&custom(CUSTOM_TOGGLE, 2.0, 0.0)),
            Some(Control::SetToggle(Toggle::Rings, false))
        );
        assert_eq!(
            c.handle(&custom(CUSTOM_TOGGLE, 1.0, 1.0)),
            Some(Control::SetToggle(Toggle::Labels, true))
        );
        assert_eq!(c.handle(&custom(CUSTOM_TOGGLE, 7.0, 1.0)), None);
        assert_eq!(c.handle(&custom(CUSTOM_TOGGLE, -0.7, 1.0)), None);
        assert_eq!(c.handle(&custom(CUSTOM_RESET_VIEW, 0.0, 0.0)), Some(Control::ResetView));
        assert_eq!(c.handle(&custom(42, 0.0, 0.0)), None);
        assert_eq!(
            c.handle(&InputEvent::Resize { width: 1024.0, height: 768.0 }),
            Some(Control::Resize(DVec2::new(1024.0, 768.0)))
        );
        assert_eq!(c.handle(&InputEvent::KeyDown { key_code: 32 }), None);
    }

    #[test]
    fn toggle_index_must_be_exact() {
        assert_eq!(Toggle::from_index(0.0), Some(Toggle::Orbits));
        assert_eq!(Toggle::from_index(2.0), Some(Toggle::Rings));
        assert_eq!(Toggle::from_index(-0.7), None);
        assert_eq!(Toggle::from_index(0.5), None);
        assert_eq!(Toggle::from_index(f32::NAN), None);
        assert_eq!(Toggle::from_index(f32::INFINITY), None);
        assert_eq!(Toggle::from_index(-1.0), None);
    }
}
