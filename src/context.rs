//! Frame state machine and host API.
//!
//! One [`Ui`] owns everything that lives across frames: the frame context,
//! the input decoder's pending bytes, the backend and the output buffer.
//! The host drives it once per loop iteration:
//!
//! ```text
//! begin(title) → text / button / group declarations → end()
//! ```
//!
//! `begin` reads one input event and runs navigation against the previous
//! frame's focus count. `end` recounts focusable widgets, clamps focus, lays
//! out the widgets and writes one frame.
//!
//! # Example
//!
//! ```ignore
//! let mut counter = 0;
//! spark_immediate::run(|ui| {
//!     ui.begin("Counter");
//!     ui.text(format!("Counter: {counter}"));
//!     if ui.button("Increment") {
//!         counter += 1;
//!     }
//!     if ui.button("Quit") {
//!         ui.quit();
//!     }
//!     ui.end();
//! })?;
//! ```

use crate::backend::Backend;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::input::{InputDecoder, InputEvent, Key};
use crate::layout::layout_widgets;
use crate::navigation::{navigate, NavState};
use crate::renderer::{render_frame, OutputBuffer, ScreenBuffer};
use crate::types::FocusId;
use crate::widget::WidgetList;

// =============================================================================
// Run state
// =============================================================================

/// Lifecycle of one run. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    NotStarted,
    Running,
    Stopped,
}

// =============================================================================
// Frame context
// =============================================================================

/// State carried through one frame.
///
/// `focus_index`, `focus_count` and `scroll_y` persist across frames. The
/// rest is reset by [`Ui::begin`].
#[derive(Debug, Clone)]
pub struct FrameContext {
    pub title: String,
    pub widgets: WidgetList,
    pub focus_index: usize,
    /// Focusable widgets declared in the previous frame.
    pub focus_count: usize,
    /// First visible render line.
    pub scroll_y: usize,
    pub width: u16,
    pub height: u16,
    /// Focus id activated this frame.
    pub pressed: Option<FocusId>,
    pub quit: bool,
    pub running: bool,
    pub input: InputEvent,
    pub first_frame: bool,
    /// A widget was activated last frame; the next frame skips input.
    pub redraw_pending: bool,
}

impl Default for FrameContext {
    fn default() -> Self {
        Self {
            title: String::new(),
            widgets: WidgetList::new(),
            focus_index: 0,
            focus_count: 0,
            scroll_y: 0,
            width: 0,
            height: 0,
            pressed: None,
            quit: false,
            running: false,
            input: InputEvent::NONE,
            first_frame: true,
            redraw_pending: false,
        }
    }
}

impl FrameContext {
    fn nav_state(&self) -> NavState {
        NavState {
            focus_index: self.focus_index,
            focus_count: self.focus_count,
            pressed: self.pressed,
            quit: self.quit,
        }
    }

    fn apply_nav(&mut self, nav: NavState) {
        self.focus_index = nav.focus_index;
        self.pressed = nav.pressed;
        self.quit = nav.quit;
    }

    /// Recount focusable widgets and pull focus back into range.
    fn settle_focus(&mut self) {
        self.focus_count = self.widgets.focus_count();
        if self.focus_index >= self.focus_count {
            self.focus_index = self.focus_count.saturating_sub(1);
        }
    }

    /// A declared widget was activated this frame.
    fn activated(&self) -> bool {
        self.pressed.is_some_and(|id| id < self.focus_count)
    }
}

// =============================================================================
// Ui
// =============================================================================

/// The host-facing frame API.
///
/// Terminal teardown runs on [`Ui::stop`] or, failing that, on drop, so the
/// terminal is restored on early returns and panics too.
pub struct Ui<B: Backend> {
    ctx: FrameContext,
    decoder: InputDecoder,
    backend: B,
    config: Config,
    out: OutputBuffer,
    state: RunState,
    /// This frame's event was synthesized rather than read.
    synthetic_input: bool,
    frames_rendered: usize,
    frames_skipped: usize,
    last_screen: Option<ScreenBuffer>,
}

impl<B: Backend> Ui<B> {
    pub fn new(backend: B, config: Config) -> Self {
        Self {
            ctx: FrameContext::default(),
            decoder: InputDecoder::with_read_chunk(config.read_chunk),
            backend,
            config,
            out: OutputBuffer::with_capacity(8192),
            state: RunState::NotStarted,
            synthetic_input: false,
            frames_rendered: 0,
            frames_skipped: 0,
            last_screen: None,
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Put the terminal into raw mode and the alternate screen.
    ///
    /// Raw-mode failure leaves the run in `NotStarted` and returns
    /// [`Error::RawMode`]. Once raw mode is on, teardown is guaranteed.
    pub fn start(&mut self) -> Result<()> {
        if self.state != RunState::NotStarted {
            return Ok(());
        }

        self.backend.enable_raw_mode().map_err(Error::RawMode)?;
        self.state = RunState::Running;
        self.ctx.running = true;
        self.ctx.quit = false;
        self.ctx.first_frame = true;

        self.backend.enter_alt_screen()?;
        self.backend.hide_cursor()?;
        self.backend.clear_screen()?;

        tracing::debug!("terminal set up");
        Ok(())
    }

    /// Restore the terminal. Only the first call after `start` does anything.
    pub fn stop(&mut self) {
        if self.state != RunState::Running {
            return;
        }
        self.state = RunState::Stopped;
        self.ctx.running = false;

        if let Err(e) = self.backend.show_cursor() {
            tracing::warn!(error = %e, "failed to show cursor");
        }
        if let Err(e) = self.backend.exit_alt_screen() {
            tracing::warn!(error = %e, "failed to leave alternate screen");
        }
        if let Err(e) = self.backend.disable_raw_mode() {
            tracing::warn!(error = %e, "failed to disable raw mode");
        }

        tracing::debug!(
            rendered = self.frames_rendered,
            skipped = self.frames_skipped,
            "terminal restored"
        );
    }

    /// Whether the loop should run another frame.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == RunState::Running && self.ctx.running && !self.ctx.quit
    }

    /// Request termination. Observed at the top of the next iteration.
    pub fn quit(&mut self) {
        self.ctx.quit = true;
    }

    // =========================================================================
    // Frame
    // =========================================================================

    /// Start a frame: capture the size, read one event, run navigation.
    pub fn begin(&mut self, title: impl Into<String>) {
        let (width, height) = match self.backend.size() {
            Ok(size) => self.config.sanitize_size(size),
            Err(e) => {
                tracing::debug!(error = %e, "terminal size unavailable, using fallback");
                self.config.fallback_size
            }
        };
        self.ctx.width = width;
        self.ctx.height = height;
        self.ctx.title = title.into();

        self.ctx.widgets.clear();
        self.ctx.pressed = None;

        if self.ctx.first_frame || self.ctx.redraw_pending {
            self.ctx.first_frame = false;
            self.ctx.redraw_pending = false;
            self.ctx.input = InputEvent::NONE;
            self.synthetic_input = true;
        } else {
            self.ctx.input = self
                .decoder
                .next_event(&mut self.backend, self.config.frame_interval);
            self.synthetic_input = false;
        }

        let mut nav = self.ctx.nav_state();
        navigate(&mut nav, &self.ctx.input);
        self.ctx.apply_nav(nav);

        if self.ctx.input.key == Key::CtrlC {
            tracing::debug!("ctrl-c received");
        }
    }

    /// Finish a frame: settle focus, then lay out and render unless skipped.
    pub fn end(&mut self) {
        if self.ctx.quit {
            return;
        }

        self.ctx.settle_focus();

        let activated = self.ctx.activated();
        self.ctx.redraw_pending = activated;

        if self.decoder.has_pending() && !activated && !self.synthetic_input {
            self.frames_skipped += 1;
            tracing::trace!(pending = self.decoder.pending_len(), "render skipped");
            return;
        }

        self.render();
    }

    fn render(&mut self) {
        let lines = layout_widgets(&self.ctx.widgets, self.ctx.width);
        let screen = render_frame(
            &lines,
            &self.ctx.title,
            self.ctx.focus_index,
            &mut self.ctx.scroll_y,
            (self.ctx.width, self.ctx.height),
            &mut self.out,
        );

        if let Err(e) = self.backend.write_bytes(self.out.as_bytes()) {
            tracing::warn!(error = %e, "frame write failed");
        }
        self.frames_rendered += 1;
        self.last_screen = Some(screen);
    }

    // =========================================================================
    // Widgets
    // =========================================================================

    /// Wrapped, non-focusable text.
    pub fn text(&mut self, label: impl Into<String>) {
        self.ctx.widgets.push_text(label);
    }

    /// A focusable button. Returns true on the frame it is activated.
    pub fn button(&mut self, label: impl Into<String>) -> bool {
        let id = self.ctx.widgets.push_button(label);
        self.ctx.pressed == Some(id)
    }

    /// A horizontal rule of dashes. `None` or zero uses the configured length.
    pub fn separation(&mut self, length: Option<usize>) {
        let n = length
            .filter(|&n| n > 0)
            .unwrap_or(self.config.separator_length);
        self.text("-".repeat(n));
    }

    /// A blank line.
    pub fn spacing(&mut self) {
        self.text("");
    }

    /// A blank line.
    pub fn break_line(&mut self) {
        self.text("");
    }

    /// Start packing widgets side by side.
    pub fn begin_group(&mut self) {
        self.ctx.widgets.push_group_start();
    }

    pub fn end_group(&mut self) {
        self.ctx.widgets.push_group_end();
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn state(&self) -> RunState {
        self.state
    }

    #[inline]
    pub fn focus_index(&self) -> usize {
        self.ctx.focus_index
    }

    #[inline]
    pub fn focus_count(&self) -> usize {
        self.ctx.focus_count
    }

    #[inline]
    pub fn scroll_y(&self) -> usize {
        self.ctx.scroll_y
    }

    /// The event decoded (or synthesized) by the last `begin`.
    #[inline]
    pub fn last_event(&self) -> InputEvent {
        self.ctx.input
    }

    #[inline]
    pub fn context(&self) -> &FrameContext {
        &self.ctx
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline]
    pub fn frames_rendered(&self) -> usize {
        self.frames_rendered
    }

    #[inline]
    pub fn frames_skipped(&self) -> usize {
        self.frames_skipped
    }

    /// The most recently rendered screen.
    pub fn last_screen(&self) -> Option<&ScreenBuffer> {
        self.last_screen.as_ref()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

impl<B: Backend> Drop for Ui<B> {
    fn drop(&mut self) {
        self.stop();
    }
}

// =============================================================================
// Run
// =============================================================================

/// Set up the terminal, call `body` once per frame until quit, tear down.
///
/// Teardown also runs when `body` panics.
pub fn run_with<B, F>(backend: B, config: Config, mut body: F) -> Result<()>
where
    B: Backend,
    F: FnMut(&mut Ui<B>),
{
    let mut ui = Ui::new(backend, config);
    ui.start()?;
    while ui.is_running() {
        body(&mut ui);
    }
    ui.stop();
    Ok(())
}

/// [`run_with`] on the real terminal with environment configuration.
#[cfg(unix)]
pub fn run<F>(body: F) -> Result<()>
where
    F: FnMut(&mut Ui<crate::backend::TerminalBackend>),
{
    run_with(
        crate::backend::TerminalBackend::new(),
        Config::from_env(),
        body,
    )
}

// =============================================================================
// Tests
// =============================================================================
