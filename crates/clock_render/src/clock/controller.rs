use log::{debug, trace};

use super::source::TimeSource;
use super::time::TimeValue;
use crate::{ClockRenderer, DisplayMode, RenderOptions};

/// User-facing edits to the display options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlAction {
    ToggleMode,
    /// Switches between 12 and 24-hour formatting. Digital mode only.
    ToggleHourFormat,
    /// Shows or hides the seconds field. Digital mode only.
    ToggleSeconds,
    ScaleUp,
    ScaleDown,
    SetScale(usize),
}

/// Drives re-rendering from a time source and the current options.
///
/// Each `tick` samples the source once. A frame is rendered only when the
/// sampled time or the options changed since the last published frame.
#[derive(Debug)]
pub struct ClockController<S> {
    source: S,
    renderer: ClockRenderer,
    options: RenderOptions,
    last_time: Option<TimeValue>,
    frame: Option<String>,
    needs_full_redraw: bool,
}

impl<S: TimeSource> ClockController<S> {
    pub fn new(source: S, options: RenderOptions) -> Self {
        Self {
            source,
            renderer: ClockRenderer,
            options,
            last_time: None,
            frame: None,
            needs_full_redraw: true,
        }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Last published frame, if any.
    pub fn frame(&self) -> Option<&str> {
        self.frame.as_deref()
    }

    /// Forces the next `tick` to render even if nothing changed.
    pub fn invalidate(&mut self) {
        self.needs_full_redraw = true;
    }

    /// Replaces all options at once.
    pub fn set_options(&mut self, options: RenderOptions) {
        if options != self.options {
            self.options = options;
            self.needs_full_redraw = true;
        }
    }

    /// Applies `action` and reports whether the options changed.
    pub fn apply(&mut self, action: ControlAction) -> bool {
        let digital = self.options.mode == DisplayMode::Digital;
        let previous_scale = self.options.scale();

        let changed = match action {
            ControlAction::ToggleMode => {
                self.options.mode = self.options.mode.toggled();
                true
            },
            ControlAction::ToggleHourFormat if digital => {
                self.options.use_24_hour = !self.options.use_24_hour;
                true
            },
            ControlAction::ToggleSeconds if digital => {
                self.options.show_seconds = !self.options.show_seconds;
                true
            },
            ControlAction::ToggleHourFormat | ControlAction::ToggleSeconds => {
                debug!("ignoring {action:?} in {:?} mode", self.options.mode);
                false
            },
            ControlAction::ScaleUp => {
                self.options.set_scale(previous_scale + 1);
                self.options.scale() != previous_scale
            },
            ControlAction::ScaleDown => {
                self.options.set_scale(previous_scale.saturating_sub(1));
                self.options.scale() != previous_scale
            },
            ControlAction::SetScale(scale) => {
                self.options.set_scale(scale);
                self.options.scale() != previous_scale
            },
        };

        if changed {
            debug!("applied {action:?}, options now {:?}", self.options);
            self.needs_full_redraw = true;
        }

        changed
    }

    /// Samples the time source and returns the new frame when it differs
    /// from the last published one.
    pub fn tick(&mut self) -> Option<&str> {
        let now = self.source.now();
        if !self.needs_full_redraw && self.last_time == Some(now) {
            return None;
        }

        self.needs_full_redraw = false;
        self.last_time = Some(now);
        trace!("rendering {now} in {:?} mode", self.options.mode);

        self.frame = Some(self.renderer.render(now, &self.options));
        self.frame.as_deref()
    }
}
