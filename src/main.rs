use anyhow::Context;
use clap::Parser;
use pixel_display::cli::Cli;
use pixel_display::{keys, sleep_ms, Event, Key, MouseButton, Session};

// === Constants ===

const FPS_UPDATE_INTERVAL: f64 = 1.0;
const CURSOR_HALF_SIZE: i64 = 8;

// === Frame rendering ===

/// Scrolling BGRA gradient with a square under the cursor
fn render(frame: &mut FrameBuffer, time: f64, cursor: (i32, i32), pressed: bool) {
    let shift = (time * 60.0) as u32;
    let width = frame.width as usize;
    for (i, pixel) in frame.pixels.chunks_exact_mut(4).enumerate() {
        let (x, y) = ((i % width) as u32, (i / width) as u32);
        let near_cursor = (i64::from(x) - i64::from(cursor.0)).abs() <= CURSOR_HALF_SIZE
            && (i64::from(y) - i64::from(cursor.1)).abs() <= CURSOR_HALF_SIZE;
        let color = if near_cursor {
            if pressed {
                [0, 0, 255, 255]
            } else {
                [255, 255, 255, 255]
            }
        } else {
            [
                (x.wrapping_add(shift) & 0xFF) as u8,
                (y.wrapping_add(shift / 2) & 0xFF) as u8,
                ((x ^ y) & 0xFF) as u8,
                255,
            ]
        };
        pixel.copy_from_slice(&color);
    }
}

fn is_quit_key(key: Key) -> bool {
    key == keys::ESCAPE || Some(key) == Key::letter('q')
}

// === Frame buffer ===

/// CPU frame matching the session surface
struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl FrameBuffer {
    fn new((width, height): (u32, u32)) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; frame_len(width, height)],
        }
    }

    /// Follow the surface size. The `Resize` event can be dropped by a full
    /// queue, so the surface is the source of truth. Returns true on change.
    fn fit(&mut self, (width, height): (u32, u32)) -> bool {
        if (width, height) == (self.width, self.height) {
            return false;
        }
        self.width = width;
        self.height = height;
        self.pixels.resize(frame_len(width, height), 0);
        true
    }
}

fn frame_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * 4
}

// === Application ===

struct FpsCounter {
    frame_count: u32,
    window_start: f64,
}

impl FpsCounter {
    fn new() -> Self {
        Self {
            frame_count: 0,
            window_start: 0.0,
        }
    }

    /// Count a frame; returns the rate once per interval
    fn tick(&mut self, now: f64) -> Option<f64> {
        self.frame_count += 1;
        let elapsed = now - self.window_start;
        if elapsed >= FPS_UPDATE_INTERVAL {
            let fps = f64::from(self.frame_count) / elapsed;
            self.frame_count = 0;
            self.window_start = now;
            Some(fps)
        } else {
            None
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli
        .display_config()
        .context("failed to load display configuration")?;
    let mut session = Session::create(&config).context("failed to open window")?;

    let mut frame = FrameBuffer::new(session.size());
    let frame_budget = 1.0 / f64::from(cli.fps.max(1));
    let mut fps = FpsCounter::new();

    if !cli.no_ui {
        println!("pixel-display - Escape or Q to quit, hold the left button to paint the cursor");
    }

    let mut quit = false;
    while !quit && !session.poll_events() {
        let frame_start = session.time();

        for event in session.events() {
            match event {
                Event::KeyDown { key } if is_quit_key(key) => quit = true,
                Event::Resize { width, height } => {
                    log::debug!("window resized to {}x{}", width, height);
                }
                Event::MousePress { button, x, y } | Event::MouseRelease { button, x, y } => {
                    log::debug!("{:?} button {} at ({}, {})", event.kind(), button.id(), x, y);
                }
                _ => {}
            }
        }

        if frame.fit(session.size()) {
            log::debug!("frame buffer now {}x{}", frame.width, frame.height);
        }
        let pressed = session.mouse_buttons() & MouseButton::Left.mask() != 0;
        render(&mut frame, frame_start, session.mouse(), pressed);
        if let Err(e) = session.blit(&frame.pixels) {
            log::warn!("Blit error: {}", e);
        }

        if let Some(rate) = fps.tick(session.time()) {
            if !cli.no_ui {
                println!("FPS: {:.1} (dropped events: {})", rate, session.dropped_events());
            }
        }

        let spent = session.time() - frame_start;
        if spent < frame_budget {
            sleep_ms(((frame_budget - spent) * 1000.0) as u32);
        }
    }

    session.destroy();
    Ok(())
}
