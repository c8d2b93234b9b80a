mod audio;
mod resource_strings;

use audio::Audio;
use core::fmt;
use eframe::egui;
use egui::*;
use egui_modal::{Modal, ModalStyle};
use gigatron::{
    function_key, AudioFifo, AudioSource, Button as PadButton, Cpu, InputPort, Options, Rom,
    UndefinedReads, Vga, DEFAULT_RAM_SIZE_BYTES, EXPANDED_RAM_SIZE_BYTES, KEY_CTRL_C, KEY_DELETE,
    KEY_ENTER, KEY_TAB, SCREEN_HEIGHT, SCREEN_WIDTH,
};
use resource_strings::*;
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};
use std::path::Path;
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const INITIAL_WIDTH: f32 = 960.;
const INITIAL_HEIGHT: f32 = 780.;
/// Upper bound on cycles executed between message-queue checks, so a ROM
/// that never toggles /VSYNC cannot wedge the worker thread.
const BURST_CYCLES: u32 = 1_000_000;
/// The pacing gate between presented frames (~60 Hz).
const FRAME_INTERVAL: Duration = Duration::from_millis(17);
/// Requested audio FIFO capacity in samples.
const AUDIO_FIFO_CAPACITY: usize = 8192;
const COLOUR_TITLE: Color32 = Color32::LIGHT_GRAY;
const COLOUR_HEADING: Color32 = Color32::LIGHT_GRAY;
const COLOUR_LABEL: Color32 = Color32::LIGHT_GRAY;
const COLOUR_BUTTON: Color32 = Color32::LIGHT_GRAY;
const COLOUR_ERROR: Color32 = Color32::RED;
const COLOUR_LED_ON: Color32 = Color32::from_rgb(64, 255, 64);
const COLOUR_LED_OFF: Color32 = Color32::from_rgb(32, 64, 32);
const UI_SPACER_TOP: f32 = 4.;
const UI_SPACER_BOTTOM: f32 = 2.;

fn print_help(program_name: &str) {
    println!("usage:");
    println!("{} [-h | --help] <rom_filename>", program_name);
}

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();
    let mut rom_path: String = PATH_DEFAULT_ROM.to_string();
    for arg in &args[1..] {
        if arg == "-h" || arg == "--help" {
            print_help(&args[0]);
            return Ok(());
        }
        rom_path = arg.clone();
    }
    // Load the ROM before opening a window, so a bad path fails fast with
    // a non-zero exit status
    let rom: Rom = match Rom::from_file(Path::new(&rom_path)) {
        Ok(rom) => rom,
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(1);
        }
    };
    log::info!("loaded ROM image `{}`", rom_path);
    let native_options = eframe::NativeOptions {
        initial_window_size: Some(Vec2::from((INITIAL_WIDTH, INITIAL_HEIGHT))),
        ..Default::default()
    };
    eframe::run_native(
        &format!("{} (v{})", TITLE_APP_WINDOW, VERSION),
        native_options,
        Box::new(move |_cc| Box::new(GigatronApp::new(rom_path, rom))),
    )
}

#[derive(PartialEq, Debug)]
enum ExecutionState {
    Stopped,
    Running,
    Paused,
}

impl fmt::Display for ExecutionState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

enum MessageToEmulator {
    SetInput { value: u8 },
    Reset { zero_ram: bool },
    Pause,
    Resume,
    Terminate,
}

/// One completed frame shipped from the worker thread to the UI.
struct FrameReport {
    pixels: Vec<u32>,
    xout: u8,
    cycles: u64,
}

struct GigatronApp {
    message_to_emulator_tx: Option<mpsc::Sender<MessageToEmulator>>,
    frame_from_emulator_rx: Option<mpsc::Receiver<FrameReport>>,
    audio_stream: Option<Audio>,
    frame_texture: Option<TextureHandle>,
    input_port: InputPort,
    held_override: Option<u8>,
    last_input_sent: u8,
    rom_path: String,
    options: Options,
    new_options: Options,
    execution_state: ExecutionState,
    last_error_string: String,
    xout_leds: u8,
    cycles_completed: u64,
    cycle_timer: Instant,
    cycles_per_second: u64,
}

impl eframe::App for GigatronApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        // Translate key events into the input port and forward changes
        self.handle_input(ctx, frame);
        // Pull any completed frames from the worker thread
        self.process_emulator_frames(ctx);
        // Render the header and footer panels
        self.render_header(ctx);
        self.render_footer(ctx);
        // Render the reconstructed display
        self.render_display(ctx);
        // Update UI again as soon as possible
        ctx.request_repaint();
    }
}

impl GigatronApp {
    fn new(rom_path: String, rom: Rom) -> Self {
        let mut app = GigatronApp {
            message_to_emulator_tx: None,
            frame_from_emulator_rx: None,
            audio_stream: None,
            frame_texture: None,
            input_port: InputPort::new(),
            held_override: None,
            last_input_sent: 0xFF,
            rom_path,
            options: Options::default(),
            new_options: Options::default(),
            execution_state: ExecutionState::Stopped,
            last_error_string: String::default(),
            xout_leds: 0,
            cycles_completed: 0,
            cycle_timer: Instant::now(),
            cycles_per_second: 0,
        };
        app.instantiate_emulator(rom);
        app
    }

    /// Builds a fresh machine from the supplied ROM and the current
    /// options, and spawns the worker thread that runs it.
    fn instantiate_emulator(&mut self, rom: Rom) {
        // If an instance is already running or paused, stop it first
        if self.execution_state != ExecutionState::Stopped {
            self.stop_emulator();
        }
        let mut cpu: Cpu = match Cpu::new(rom, self.options) {
            Ok(cpu) => cpu,
            Err(error) => {
                self.last_error_string = error.to_string();
                return;
            }
        };
        // An idle controller reads all ones on the active-low port
        cpu.live_input = 0xFF;
        let fifo: Arc<AudioFifo> = Arc::new(AudioFifo::new(AUDIO_FIFO_CAPACITY));
        let mut vga: Vga = Vga::new(self.options.audio_source);
        // Prepare cross-thread communication channels between UI and emulator
        let (message_tx, message_rx) = mpsc::channel();
        let (frame_tx, frame_rx) = mpsc::channel();
        self.message_to_emulator_tx = Some(message_tx);
        self.frame_from_emulator_rx = Some(frame_rx);
        self.audio_stream = Some(Audio::new(Arc::clone(&fifo)));
        self.last_input_sent = 0xFF;
        self.last_error_string = String::default();
        self.cycles_completed = 0;
        self.cycle_timer = Instant::now();
        self.cycles_per_second = 0;
        // Spawn a new thread to run the machine in bursts, handling
        // communication with the UI via the previously created channels
        thread::spawn(move || {
            let mut paused: bool = false;
            let mut last_vsync: Instant = Instant::now();
            'outer: loop {
                for message in message_rx.try_iter() {
                    match message {
                        MessageToEmulator::SetInput { value } => cpu.live_input = value,
                        MessageToEmulator::Reset { zero_ram } => cpu.reset(zero_ram),
                        MessageToEmulator::Pause => paused = true,
                        MessageToEmulator::Resume => paused = false,
                        MessageToEmulator::Terminate => break 'outer,
                    }
                }
                if paused {
                    thread::sleep(Duration::from_millis(10));
                    continue;
                }
                // Run a burst of cycles: until the frame completes, or the
                // cycle bound is hit, whichever comes first
                let mut frame_ready: bool = false;
                for _ in 0..BURST_CYCLES {
                    cpu.step();
                    if vga.clock(&cpu, &fifo) {
                        frame_ready = true;
                        break;
                    }
                }
                if frame_ready {
                    // Pace to the display rate before presenting
                    let since_vsync: Duration = last_vsync.elapsed();
                    if since_vsync < FRAME_INTERVAL {
                        thread::sleep(FRAME_INTERVAL - since_vsync);
                    }
                    last_vsync = Instant::now();
                    let report = FrameReport {
                        pixels: vga.pixels().to_vec(),
                        xout: cpu.xout,
                        cycles: cpu.cycles,
                    };
                    // The UI dropping its receiver is the shutdown signal
                    if frame_tx.send(report).is_err() {
                        break 'outer;
                    }
                }
            }
        });
        self.execution_state = ExecutionState::Running;
    }

    fn stop_emulator(&mut self) {
        self.execution_state = ExecutionState::Stopped;
        self.audio_stream = None;
        if let Some(message_to_emulator_tx) = &self.message_to_emulator_tx {
            message_to_emulator_tx
                .send(MessageToEmulator::Terminate)
                .ok();
        }
        self.message_to_emulator_tx = None;
        self.frame_from_emulator_rx = None;
        self.cycles_per_second = 0;
    }

    fn pause_emulator(&mut self) {
        self.execution_state = ExecutionState::Paused;
        if let Some(audio_stream) = &self.audio_stream {
            audio_stream.pause();
        }
        self.send_message(MessageToEmulator::Pause);
    }

    fn resume_emulator(&mut self) {
        self.execution_state = ExecutionState::Running;
        if let Some(audio_stream) = &self.audio_stream {
            audio_stream.play();
        }
        self.send_message(MessageToEmulator::Resume);
    }

    fn send_message(&self, message: MessageToEmulator) {
        if let Some(message_to_emulator_tx) = &self.message_to_emulator_tx {
            if message_to_emulator_tx.send(message).is_err() {
                // absorb the error; no need to handle
            }
        }
    }

    fn handle_input(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        let events: Vec<Event> = ctx.input(|i| i.events.clone());
        let mut text_pulse: bool = false;
        for event in events {
            match event {
                Event::Key {
                    key: Key::Escape,
                    pressed: true,
                    ..
                } => frame.close(),
                Event::Key {
                    key,
                    pressed,
                    modifiers,
                    ..
                } => {
                    if let Some(button) = gamepad_button(key) {
                        self.input_port.set_button(button, pressed);
                    }
                    if let Some(code) = override_code(key, modifiers) {
                        if pressed {
                            self.input_port.set_key_override(Some(code));
                            self.held_override = Some(code);
                        } else if self.held_override == Some(code) {
                            self.input_port.set_key_override(None);
                            self.held_override = None;
                        }
                    }
                }
                Event::Text(text) => {
                    // Keys already serving as controller buttons are not
                    // forwarded as ASCII too
                    match text.bytes().next() {
                        Some(byte) if !matches!(byte, b'z' | b'x' | b'Z' | b'X') => {
                            self.input_port.set_key_override(Some(byte));
                            text_pulse = true;
                        }
                        _ => (),
                    }
                }
                _ => (),
            }
        }
        let value: u8 = self.input_port.encode();
        if value != self.last_input_sent {
            self.send_message(MessageToEmulator::SetInput { value });
            self.last_input_sent = value;
        }
        // A typed character is driven onto the port for a single frame
        if text_pulse {
            self.input_port.set_key_override(self.held_override);
        }
    }

    fn process_emulator_frames(&mut self, ctx: &egui::Context) {
        let mut latest: Option<FrameReport> = None;
        if let Some(frame_from_emulator_rx) = &self.frame_from_emulator_rx {
            for report in frame_from_emulator_rx.try_iter() {
                latest = Some(report);
            }
        }
        if let Some(report) = latest {
            self.xout_leds = report.xout & 0x0F;
            // Recalculate cycles per second about once a second.  The
            // counter restarts from zero across a machine reset, hence
            // the saturating difference
            let millis_elapsed: u128 = self.cycle_timer.elapsed().as_millis();
            if millis_elapsed >= 1000 {
                self.cycles_per_second =
                    report.cycles.saturating_sub(self.cycles_completed) * 1000
                        / millis_elapsed as u64;
                self.cycles_completed = report.cycles;
                self.cycle_timer = Instant::now();
            }
            let image: ColorImage = frame_to_image(&report.pixels);
            match &mut self.frame_texture {
                Some(texture) => texture.set(image, TextureOptions::NEAREST),
                None => {
                    self.frame_texture =
                        Some(ctx.load_texture(ID_FRAME_TEXTURE, image, TextureOptions::NEAREST))
                }
            }
        }
    }

    fn render_header(&mut self, ctx: &egui::Context) {
        let modal: Modal = self.render_modal_options(ctx);
        TopBottomPanel::top(ID_TOP_PANEL).show(ctx, |ui| {
            ui.add_space(UI_SPACER_TOP);
            ui.horizontal(|ui| {
                if ui
                    .button(RichText::new(CAPTION_BUTTON_LOAD_ROM).color(COLOUR_BUTTON))
                    .on_hover_text(TOOLTIP_BUTTON_LOAD_ROM)
                    .clicked()
                {
                    if let Some(file) = FileDialog::new()
                        .set_title(TITLE_LOAD_ROM_WINDOW)
                        .add_filter(FILTER_ROM, &["rom"])
                        .add_filter(FILTER_ALL, &["*"])
                        .pick_file()
                    {
                        self.rom_path = file.display().to_string();
                        self.reload_rom_and_restart();
                    }
                }
                if ui
                    .button(RichText::new(CAPTION_BUTTON_OPTIONS).color(COLOUR_BUTTON))
                    .on_hover_text(TOOLTIP_BUTTON_OPTIONS)
                    .clicked()
                {
                    self.new_options = self.options;
                    modal.open();
                }
                ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                    ui.label(RichText::new(&self.rom_path).color(COLOUR_LABEL).monospace());
                });
            });
            ui.add_space(UI_SPACER_BOTTOM);
        });
    }

    fn render_footer(&mut self, ctx: &egui::Context) {
        TopBottomPanel::bottom(ID_BOTTOM_PANEL).show(ctx, |ui| {
            ui.add_space(UI_SPACER_TOP);
            if self.last_error_string != String::default() {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(CAPTION_LABEL_ERROR).color(COLOUR_ERROR));
                    ui.label(
                        RichText::new(&self.last_error_string)
                            .color(COLOUR_ERROR)
                            .monospace(),
                    );
                });
                ui.separator();
            }
            ui.horizontal(|ui| {
                match self.execution_state {
                    ExecutionState::Paused => {
                        if ui
                            .button(RichText::new(CAPTION_BUTTON_RUN).color(COLOUR_BUTTON))
                            .on_hover_text(TOOLTIP_BUTTON_RUN)
                            .clicked()
                        {
                            self.resume_emulator();
                        }
                    }
                    ExecutionState::Running => {
                        if ui
                            .button(RichText::new(CAPTION_BUTTON_PAUSE).color(COLOUR_BUTTON))
                            .on_hover_text(TOOLTIP_BUTTON_PAUSE)
                            .clicked()
                        {
                            self.pause_emulator();
                        }
                    }
                    ExecutionState::Stopped => {
                        ui.add_enabled(
                            false,
                            Button::new(RichText::new(CAPTION_BUTTON_RUN).color(COLOUR_BUTTON)),
                        );
                    }
                }
                if ui
                    .add_enabled(
                        self.execution_state != ExecutionState::Stopped,
                        Button::new(RichText::new(CAPTION_BUTTON_RESTART).color(COLOUR_BUTTON)),
                    )
                    .on_hover_text(TOOLTIP_BUTTON_RESTART)
                    .clicked()
                {
                    self.send_message(MessageToEmulator::Reset { zero_ram: true });
                }
                // The machine's four status LEDs
                ui.separator();
                for bit in 0..4 {
                    let colour: Color32 = match self.xout_leds & (1 << bit) {
                        0 => COLOUR_LED_OFF,
                        _ => COLOUR_LED_ON,
                    };
                    ui.label(RichText::new("●").color(colour))
                        .on_hover_text(TOOLTIP_LEDS);
                }
                ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                    let state_colour: Color32 = match self.execution_state {
                        ExecutionState::Stopped => Color32::RED,
                        ExecutionState::Paused => Color32::YELLOW,
                        ExecutionState::Running => Color32::GREEN,
                    };
                    ui.label(RichText::new(&self.execution_state.to_string()).color(state_colour));
                    ui.label(RichText::new(CAPTION_LABEL_EXECUTION_STATUS).color(COLOUR_LABEL));
                    ui.label(RichText::new(self.cycles_per_second.to_string()));
                    ui.label(RichText::new(CAPTION_LABEL_CYCLES_PER_SECOND).color(COLOUR_LABEL));
                });
            });
            ui.add_space(UI_SPACER_BOTTOM);
        });
    }

    fn render_display(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(texture) = &self.frame_texture {
                // Scale to the available space while keeping the 4:3 shape
                let available: Vec2 = ui.available_size();
                let scale: f32 = (available.x / SCREEN_WIDTH as f32)
                    .min(available.y / SCREEN_HEIGHT as f32);
                let size: Vec2 =
                    Vec2::new(SCREEN_WIDTH as f32 * scale, SCREEN_HEIGHT as f32 * scale);
                ui.centered_and_justified(|ui| {
                    ui.image(texture, size);
                });
            }
        });
    }

    fn render_modal_options(&mut self, ctx: &egui::Context) -> Modal {
        let modal_style: ModalStyle = ModalStyle {
            default_width: Some(0.), // seems necessary to force window to adjust to sensible width
            ..Default::default()
        };
        let modal = Modal::new(ctx, ID_OPTIONS_MODAL).with_style(&modal_style);
        modal.show(|ui| {
            modal.title(ui, RichText::new(TITLE_OPTIONS_WINDOW).color(COLOUR_TITLE));
            ui.heading(RichText::new(CAPTION_HEADING_MACHINE).color(COLOUR_HEADING));
            egui::Grid::new(ID_OPTIONS_MODAL_GRID).show(ui, |ui| {
                ui.label(RichText::new(CAPTION_LABEL_RAM_SIZE).color(COLOUR_LABEL));
                ui.horizontal(|ui| {
                    if ui
                        .add(SelectableLabel::new(
                            self.new_options.ram_size_bytes == DEFAULT_RAM_SIZE_BYTES,
                            CAPTION_RADIO_RAM_32K,
                        ))
                        .clicked()
                    {
                        self.new_options.ram_size_bytes = DEFAULT_RAM_SIZE_BYTES;
                    }
                    if ui
                        .add(SelectableLabel::new(
                            self.new_options.ram_size_bytes == EXPANDED_RAM_SIZE_BYTES,
                            CAPTION_RADIO_RAM_64K,
                        ))
                        .clicked()
                    {
                        self.new_options.ram_size_bytes = EXPANDED_RAM_SIZE_BYTES;
                    }
                });
                ui.end_row();
            });
            ui.separator();
            ui.heading(RichText::new(CAPTION_HEADING_COMPATIBILITY).color(COLOUR_HEADING));
            ui.label(RichText::new(CAPTION_LABEL_AUDIO_SOURCE).color(COLOUR_LABEL));
            ui.horizontal(|ui| {
                if ui
                    .add(SelectableLabel::new(
                        self.new_options.audio_source == AudioSource::Xout,
                        CAPTION_RADIO_AUDIO_XOUT,
                    ))
                    .clicked()
                {
                    self.new_options.audio_source = AudioSource::Xout;
                }
                if ui
                    .add(SelectableLabel::new(
                        self.new_options.audio_source == AudioSource::Acc,
                        CAPTION_RADIO_AUDIO_ACC,
                    ))
                    .clicked()
                {
                    self.new_options.audio_source = AudioSource::Acc;
                }
            });
            ui.label(RichText::new(CAPTION_LABEL_UNDEFINED_READS).color(COLOUR_LABEL));
            ui.horizontal(|ui| {
                if ui
                    .add(SelectableLabel::new(
                        self.new_options.undefined_reads == UndefinedReads::Zero,
                        CAPTION_RADIO_UNDEF_ZERO,
                    ))
                    .clicked()
                {
                    self.new_options.undefined_reads = UndefinedReads::Zero;
                }
                if ui
                    .add(SelectableLabel::new(
                        self.new_options.undefined_reads == UndefinedReads::Random,
                        CAPTION_RADIO_UNDEF_RANDOM,
                    ))
                    .clicked()
                {
                    self.new_options.undefined_reads = UndefinedReads::Random;
                }
            });
            ui.separator();
            ui.heading(RichText::new(CAPTION_HEADING_OPTIONS_LOAD_SAVE).color(COLOUR_HEADING));
            ui.horizontal(|ui| {
                if ui
                    .button(RichText::new(CAPTION_BUTTON_LOAD_OPTIONS).color(COLOUR_BUTTON))
                    .on_hover_text(TOOLTIP_BUTTON_LOAD_OPTIONS)
                    .clicked()
                {
                    if let Some(file) = FileDialog::new()
                        .set_title(TITLE_LOAD_OPTIONS_WINDOW)
                        .add_filter(FILTER_JSON, &["json"])
                        .add_filter(FILTER_ALL, &["*"])
                        .pick_file()
                    {
                        match Options::load_from_file(Path::new(&file.display().to_string())) {
                            Ok(options) => self.new_options = options,
                            Err(_) => {
                                MessageDialog::new()
                                    .set_level(MessageLevel::Error)
                                    .set_title(TITLE_LOAD_OPTIONS_ERROR_WINDOW)
                                    .set_description(ERROR_LOAD_OPTIONS)
                                    .set_buttons(MessageButtons::Ok)
                                    .show();
                            }
                        }
                    }
                }
                if ui
                    .button(RichText::new(CAPTION_BUTTON_SAVE_OPTIONS).color(COLOUR_BUTTON))
                    .on_hover_text(TOOLTIP_BUTTON_SAVE_OPTIONS)
                    .clicked()
                {
                    if let Some(file) = FileDialog::new()
                        .set_title(TITLE_SAVE_OPTIONS_WINDOW)
                        .add_filter(FILTER_JSON, &["json"])
                        .add_filter(FILTER_ALL, &["*"])
                        .save_file()
                    {
                        if self
                            .new_options
                            .save_to_file(Path::new(&file.display().to_string()))
                            .is_err()
                        {
                            MessageDialog::new()
                                .set_level(MessageLevel::Error)
                                .set_title(TITLE_SAVE_OPTIONS_ERROR_WINDOW)
                                .set_description(ERROR_SAVE_OPTIONS)
                                .set_buttons(MessageButtons::Ok)
                                .show();
                        }
                    }
                }
            });
            // Buttons to close modal dialogue box
            modal.buttons(ui, |ui| {
                modal.button(ui, CAPTION_BUTTON_CANCEL);
                if modal.button(ui, CAPTION_BUTTON_OK).clicked() {
                    self.options = self.new_options;
                    self.reload_rom_and_restart();
                };
            });
        });
        modal
    }

    /// Re-reads the ROM at the stored path and restarts the machine with
    /// the current options.
    fn reload_rom_and_restart(&mut self) {
        match Rom::from_file(Path::new(&self.rom_path)) {
            Ok(rom) => self.instantiate_emulator(rom),
            Err(error) => {
                self.stop_emulator();
                self.last_error_string = error.to_string();
            }
        }
    }
}

/// Maps a key to the controller button it drives, if any.
fn gamepad_button(key: Key) -> Option<PadButton> {
    match key {
        Key::ArrowRight => Some(PadButton::Right),
        Key::ArrowLeft => Some(PadButton::Left),
        Key::ArrowDown => Some(PadButton::Down),
        Key::ArrowUp => Some(PadButton::Up),
        Key::PageUp => Some(PadButton::Start),
        Key::PageDown => Some(PadButton::Select),
        Key::Z => Some(PadButton::B),
        Key::X => Some(PadButton::A),
        _ => None,
    }
}

/// Maps a key to the code that overrides the controller byte while it is
/// held, if any.
fn override_code(key: Key, modifiers: Modifiers) -> Option<u8> {
    if modifiers.ctrl && key == Key::C {
        return Some(KEY_CTRL_C);
    }
    match key {
        Key::Tab => Some(KEY_TAB),
        Key::Enter => Some(KEY_ENTER),
        Key::Backspace | Key::Delete => Some(KEY_DELETE),
        Key::F1 => function_key(1),
        Key::F2 => function_key(2),
        Key::F3 => function_key(3),
        Key::F4 => function_key(4),
        Key::F5 => function_key(5),
        Key::F6 => function_key(6),
        Key::F7 => function_key(7),
        Key::F8 => function_key(8),
        Key::F9 => function_key(9),
        Key::F10 => function_key(10),
        Key::F11 => function_key(11),
        Key::F12 => function_key(12),
        _ => None,
    }
}

/// Converts one recovered framebuffer into an egui image.  The pipeline
/// packs blue in bits 23:16, green in 15:8 and red in 7:0.
fn frame_to_image(pixels: &[u32]) -> ColorImage {
    let pixels: Vec<Color32> = pixels
        .iter()
        .map(|&argb| {
            Color32::from_rgb(
                (argb & 0xFF) as u8,
                ((argb >> 8) & 0xFF) as u8,
                ((argb >> 16) & 0xFF) as u8,
            )
        })
        .collect();
    ColorImage {
        size: [SCREEN_WIDTH, SCREEN_HEIGHT],
        pixels,
    }
}
