//! Background thread that owns a layout and its animator.
//!
//! The thread sleeps on its command channel between ticks, so commands are
//! handled as soon as they arrive and ticks fire on cadence in between. A
//! tick always completes before the next command is looked at.

use std::sync::mpsc::{self, RecvTimeoutError};

use rand::rngs::StdRng;
use web_time::Instant;

use super::controller::TextAnimator;
use super::mode::AnimationMode;
use super::scheduler::TickScheduler;
use crate::error::GlyphMotionError;
use crate::layout::TextLayout;
use crate::options::AnimationConfig;

type LayoutEdit<L> = Box<dyn FnOnce(&mut L) + Send>;
type LayoutQuery<L> = Box<dyn FnOnce(&L) + Send>;

enum Command<L> {
    SetMode(AnimationMode, mpsc::Sender<AnimationMode>),
    ContentChanged,
    Edit(LayoutEdit<L>),
    Inspect(LayoutQuery<L>),
    Configure(AnimationConfig),
    QueryMode(mpsc::Sender<AnimationMode>),
    Shutdown,
}

/// Animates one text on a dedicated thread.
pub struct AnimationWorker<L: TextLayout + Send + 'static> {
    command_tx: mpsc::Sender<Command<L>>,
    thread: Option<std::thread::JoinHandle<()>>,
}

impl<L: TextLayout + Send + 'static> AnimationWorker<L> {
    /// Spawn the worker thread, moving `layout` and `animator` onto it.
    ///
    /// # Errors
    ///
    /// Returns [`GlyphMotionError::ThreadSpawn`] if the thread fails to
    /// spawn.
    pub fn spawn(
        layout: L,
        animator: TextAnimator<StdRng>,
    ) -> Result<Self, GlyphMotionError> {
        let (command_tx, command_rx) = mpsc::channel::<Command<L>>();
        let thread = std::thread::Builder::new()
            .name("glyph-animation".into())
            .spawn(move || Self::thread_loop(&command_rx, layout, animator))
            .map_err(GlyphMotionError::ThreadSpawn)?;
        Ok(Self {
            command_tx,
            thread: Some(thread),
        })
    }

    /// Switch mode; returns the mode now active on the worker.
    ///
    /// # Errors
    ///
    /// Returns [`GlyphMotionError::WorkerDisconnected`] if the thread is gone.
    pub fn set_mode(
        &self,
        mode: AnimationMode,
    ) -> Result<AnimationMode, GlyphMotionError> {
        let (tx, rx) = mpsc::channel();
        self.send(Command::SetMode(mode, tx))?;
        rx.recv().map_err(|_| GlyphMotionError::WorkerDisconnected)
    }

    /// Stop animating.
    ///
    /// # Errors
    ///
    /// Returns [`GlyphMotionError::WorkerDisconnected`] if the thread is gone.
    pub fn stop(&self) -> Result<(), GlyphMotionError> {
        self.set_mode(AnimationMode::None).map(|_| ())
    }

    /// Mode currently active on the worker.
    ///
    /// # Errors
    ///
    /// Returns [`GlyphMotionError::WorkerDisconnected`] if the thread is gone.
    pub fn mode(&self) -> Result<AnimationMode, GlyphMotionError> {
        let (tx, rx) = mpsc::channel();
        self.send(Command::QueryMode(tx))?;
        rx.recv().map_err(|_| GlyphMotionError::WorkerDisconnected)
    }

    /// Tell the animator the layout's content changed out of band.
    pub fn notify_content_changed(&self) {
        if self.send(Command::ContentChanged).is_err() {
            log::warn!("content-changed notification dropped: worker gone");
        }
    }

    /// Mutate the layout on the worker thread (e.g. replace its text). The
    /// baseline is recaptured on the next tick.
    pub fn edit_layout(&self, edit: impl FnOnce(&mut L) + Send + 'static) {
        if self.send(Command::Edit(Box::new(edit))).is_err() {
            log::warn!("layout edit dropped: worker gone");
        }
    }

    /// Replace the tunables; applies from the next tick.
    pub fn set_config(&self, config: AnimationConfig) {
        if self.send(Command::Configure(config)).is_err() {
            log::warn!("config update dropped: worker gone");
        }
    }

    /// Read from the layout on the worker thread and return the result.
    ///
    /// # Errors
    ///
    /// Returns [`GlyphMotionError::WorkerDisconnected`] if the thread is gone.
    pub fn inspect<T: Send + 'static>(
        &self,
        query: impl FnOnce(&L) -> T + Send + 'static,
    ) -> Result<T, GlyphMotionError> {
        let (tx, rx) = mpsc::channel();
        self.send(Command::Inspect(Box::new(move |layout: &L| {
            let _ = tx.send(query(layout));
        })))?;
        rx.recv().map_err(|_| GlyphMotionError::WorkerDisconnected)
    }

    /// Shut down the thread and wait for it to finish.
    pub fn shutdown(&mut self) {
        let _ = self.command_tx.send(Command::Shutdown);
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }

    fn send(&self, command: Command<L>) -> Result<(), GlyphMotionError> {
        self.command_tx
            .send(command)
            .map_err(|_| GlyphMotionError::WorkerDisconnected)
    }

    fn thread_loop(
        command_rx: &mpsc::Receiver<Command<L>>,
        mut layout: L,
        mut animator: TextAnimator<StdRng>,
    ) {
        let mut scheduler = TickScheduler::new();
        loop {
            let outcome =
                scheduler.poll(&mut animator, &mut layout, Instant::now());
            let command = match outcome.wait() {
                None => command_rx.recv().ok(),
                Some(wait) => match command_rx.recv_timeout(wait) {
                    Ok(command) => Some(command),
                    Err(RecvTimeoutError::Timeout) => continue,
                    Err(RecvTimeoutError::Disconnected) => None,
                },
            };
            let Some(command) = command else { break };

            match command {
                Command::Shutdown => break,
                Command::SetMode(mode, reply) => {
                    let _ = reply.send(animator.set_mode(mode, &mut layout));
                }
                Command::QueryMode(reply) => {
                    let _ = reply.send(animator.mode());
                }
                Command::ContentChanged => animator.notify_content_changed(),
                Command::Edit(edit) => {
                    edit(&mut layout);
                    animator.notify_content_changed();
                }
                Command::Inspect(query) => query(&layout),
                Command::Configure(config) => animator.set_config(config),
            }
        }
        log::debug!("animation worker exiting");
    }
}

impl<L: TextLayout + Send + 'static> Drop for AnimationWorker<L> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::scheduler::MOTION_INTERVAL;
    use crate::layout::MonospaceLayout;

    fn worker(text: &str) -> AnimationWorker<MonospaceLayout> {
        AnimationWorker::spawn(MonospaceLayout::new(text), TextAnimator::seeded(1))
            .unwrap()
    }

    #[test]
    fn set_mode_round_trips() {
        let w = worker("AB");
        assert_eq!(w.mode().unwrap(), AnimationMode::None);
        assert_eq!(w.set_mode(AnimationMode::Wave).unwrap(), AnimationMode::Wave);
        assert_eq!(w.mode().unwrap(), AnimationMode::Wave);
    }

    #[test]
    fn new_mode_ticks_before_next_command() {
        let w = worker("AB");
        let _ = w.set_mode(AnimationMode::UpAndDown).unwrap();
        let commits = w.inspect(MonospaceLayout::vertex_commits).unwrap();
        assert!(commits >= 1);
        let moved = w
            .inspect(|l| l.quad(0) != Some(l.glyphs()[0].corners))
            .unwrap();
        assert!(moved);
    }

    #[test]
    fn edit_layout_recaptures_baseline() {
        let w = worker("AB");
        let _ = w.set_mode(AnimationMode::Wave).unwrap();
        w.edit_layout(|l| l.set_text("ABCD"));
        let text = w.inspect(|l| l.text().to_owned()).unwrap();
        assert_eq!(text, "ABCD");

        // The next wave tick is at most one interval away.
        std::thread::sleep(MOTION_INTERVAL * 3);
        let moved = w
            .inspect(|l| l.quad(3).is_some_and(|q| q != l.glyphs()[3].corners))
            .unwrap();
        assert!(moved);
    }

    #[test]
    fn stop_restores_geometry() {
        let w = worker("AB");
        let _ = w.set_mode(AnimationMode::Jitter).unwrap();
        w.stop().unwrap();
        let rest = w
            .inspect(|l| l.quad(1) == Some(l.glyphs()[1].corners))
            .unwrap();
        assert!(rest);
    }

    #[test]
    fn commands_fail_after_shutdown() {
        let mut w = worker("AB");
        w.shutdown();
        assert!(matches!(
            w.mode(),
            Err(GlyphMotionError::WorkerDisconnected)
        ));
    }
}
