use minifb::{Key, Window, WindowOptions};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use tracing::{debug, error, warn};

use crate::canvas::Canvas;

/// Latest rendered plot. `generation` goes up on every publish so the viewer
/// only copies the canvas when it changed.
#[derive(Debug, Default)]
pub struct Frame {
    pub generation: u64,
    pub canvas: Option<Canvas>,
}

/// Written by the REPL and read by the viewer thread.
pub type SharedFrame = Arc<Mutex<Frame>>;

pub fn shared_frame() -> SharedFrame {
    Arc::new(Mutex::new(Frame::default()))
}

/// Opens the plot window on its own thread and keeps showing the newest frame
/// until the window is closed or Escape is pressed.
pub fn spawn_viewer(frame: SharedFrame, width: usize, height: usize) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut window = match Window::new(
            "Recursion Explorer",
            width,
            height,
            WindowOptions::default(),
        ) {
            Ok(w) => w,
            Err(e) => {
                warn!(error = %e, "plot window unavailable, use /export instead");
                return;
            }
        };

        window.set_target_fps(30);
        let mut shown = Canvas::new(width, height);
        let mut seen = 0u64;
        debug!(width, height, "viewer started");

        while window.is_open() && !window.is_key_down(Key::Escape) {
            match frame.lock() {
                Ok(guard) => {
                    if guard.generation != seen {
                        if let Some(canvas) = &guard.canvas {
                            shown = canvas.clone();
                        }
                        seen = guard.generation;
                        debug!(generation = seen, "viewer picked up new frame");
                    }
                }
                Err(_) => {
                    error!("frame lock poisoned, closing viewer");
                    break;
                }
            }

            if let Err(e) = window.update_with_buffer(&shown.buffer, shown.width, shown.height) {
                error!(error = %e, "viewer update failed");
                break;
            }
        }
        debug!("viewer closed");
    })
}

/// Put `canvas` into the shared slot so the viewer picks it up.
pub fn publish(frame: &SharedFrame, canvas: Canvas) {
    match frame.lock() {
        Ok(mut slot) => {
            slot.canvas = Some(canvas);
            slot.generation += 1;
        }
        Err(_) => warn!("frame lock poisoned, plot not shown"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publish_bumps_generation_and_replaces_canvas() {
        let frame = shared_frame();
        assert_eq!(frame.lock().unwrap().generation, 0);
        assert!(frame.lock().unwrap().canvas.is_none());

        publish(&frame, Canvas::new(4, 3));
        publish(&frame, Canvas::new(8, 2));

        let slot = frame.lock().unwrap();
        assert_eq!(slot.generation, 2);
        assert_eq!(slot.canvas, Some(Canvas::new(8, 2)));
    }
}
