//! Desktop preview app for morse-led
//!
//! Simulates the keyed LED in a window. Text typed in the UI is queued as a
//! write request, encoded by a worker thread, and the transcript is read back
//! the same way an independent reader would.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::time::Duration as StdDuration;

use eframe::egui::{self};
use morse_led::request::{DEFAULT_REQUEST_DEPTH, DEFAULT_REQUEST_LEN};
use morse_led::{
    DEFAULT_TRANSCRIPT_SIZE, DeviceConfig, Duration, Hold, MorseDevice, RequestQueue,
    SignalDriver, SliceSink, Transcript,
};

/// Radius of the simulated LED in pixels
const LED_RADIUS: f32 = 28.0;

/// How long the worker sleeps when no request is queued
const IDLE_POLL: StdDuration = StdDuration::from_millis(20);

/// Lit LED colour
const LED_ON: egui::Color32 = egui::Color32::from_rgb(255, 170, 40);

/// Unlit LED colour
const LED_OFF: egui::Color32 = egui::Color32::from_rgb(60, 45, 30);

/// Transcript shared between the worker (writer) and the UI (reader)
static TRANSCRIPT: Transcript<DEFAULT_TRANSCRIPT_SIZE> = Transcript::new();

/// Write requests from the UI to the worker
static REQUESTS: RequestQueue<DEFAULT_REQUEST_LEN, DEFAULT_REQUEST_DEPTH> = RequestQueue::new();

/// Simulated LED state
static LED: AtomicBool = AtomicBool::new(false);

/// Playback speed in percent of real time
static SPEED: AtomicU32 = AtomicU32::new(100);

/// LED driver flipping the shared flag
struct PreviewLed;

impl SignalDriver for PreviewLed {
    fn assert(&mut self) {
        LED.store(true, Ordering::Relaxed);
    }

    fn deassert(&mut self) {
        LED.store(false, Ordering::Relaxed);
    }
}

/// Thread sleep scaled by the speed slider
struct ScaledSleep;

impl Hold for ScaledSleep {
    fn hold(&mut self, duration: Duration) {
        let speed = u64::from(SPEED.load(Ordering::Relaxed).max(1));
        let micros = duration.as_micros() * 100 / speed;
        std::thread::sleep(StdDuration::from_micros(micros));
    }
}

fn spawn_worker() {
    std::thread::spawn(|| {
        let mut device =
            MorseDevice::new(PreviewLed, ScaledSleep, &TRANSCRIPT, &DeviceConfig::default());
        loop {
            device.serve_pending(REQUESTS.receiver());
            std::thread::sleep(IDLE_POLL);
        }
    });
}

fn main() -> eframe::Result<()> {
    spawn_worker();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 420.0])
            .with_title("Morse LED Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "morse-led-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    /// Text being edited
    text: String,
    /// Everything read from the transcript so far
    transcript: String,
    /// Playback speed in percent
    speed: u32,
    /// Result of the last submission
    status: String,
}

impl PreviewApp {
    fn new() -> Self {
        Self {
            text: String::from("SOS"),
            transcript: String::new(),
            speed: 100,
            status: String::new(),
        }
    }

    /// Queue the current text for encoding
    fn send_text(&mut self) {
        self.status = match REQUESTS.submit(self.text.as_bytes()) {
            Ok(()) => format!("queued {} bytes", self.text.len()),
            Err(error) => error.to_string(),
        };
    }

    /// Pull whatever the worker has written since the last frame
    fn read_transcript(&mut self) {
        let mut buf = [0u8; DEFAULT_TRANSCRIPT_SIZE];
        let max = buf.len();
        let mut sink = SliceSink::new(&mut buf);
        if let Ok(count) = TRANSCRIPT.reader().drain_to(&mut sink, max) {
            self.transcript
                .push_str(&String::from_utf8_lossy(&buf[..count]));
        }
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.read_transcript();

        // Keep polling the LED and the transcript
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Text:");
                let response = ui.text_edit_singleline(&mut self.text);
                let submitted =
                    response.lost_focus() && ui.input(|input| input.key_pressed(egui::Key::Enter));
                if ui.button("Send").clicked() || submitted {
                    self.send_text();
                }
            });

            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.label("Speed:");
                if ui
                    .add(egui::Slider::new(&mut self.speed, 25..=400).suffix("%"))
                    .changed()
                {
                    SPEED.store(self.speed, Ordering::Relaxed);
                }
                ui.add_space(8.0);
                ui.label(&self.status);
            });

            ui.add_space(16.0);

            // === LED ===
            let (response, painter) = ui.allocate_painter(
                egui::vec2(LED_RADIUS * 2.0, LED_RADIUS * 2.0),
                egui::Sense::hover(),
            );
            let color = if LED.load(Ordering::Relaxed) {
                LED_ON
            } else {
                LED_OFF
            };
            painter.circle_filled(response.rect.center(), LED_RADIUS, color);

            ui.add_space(16.0);

            ui.horizontal(|ui| {
                ui.label("Transcript:");
                if ui.button("Clear").clicked() {
                    self.transcript.clear();
                }
            });
            egui::ScrollArea::vertical()
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    ui.monospace(&self.transcript);
                });
        });
    }
}
