// Paths
pub(super) const PATH_DEFAULT_ROM: &str = "../data/ROMv5a.rom";

// Window titles
pub(super) const TITLE_APP_WINDOW: &str = "Gigatron TTL";
pub(super) const TITLE_LOAD_ROM_WINDOW: &str = "Locate ROM image to load";
pub(super) const TITLE_LOAD_OPTIONS_WINDOW: &str = "Locate options file to load";
pub(super) const TITLE_SAVE_OPTIONS_WINDOW: &str = "Locate options file to save";
pub(super) const TITLE_OPTIONS_WINDOW: &str = "Emulation Options";
pub(super) const TITLE_LOAD_OPTIONS_ERROR_WINDOW: &str = "Error";
pub(super) const TITLE_SAVE_OPTIONS_ERROR_WINDOW: &str = "Error";

// Error messages
pub(super) const ERROR_LOAD_OPTIONS: &str = "Could not load options from file";
pub(super) const ERROR_SAVE_OPTIONS: &str = "Could not save options to file";

// File dialogue filters
pub(super) const FILTER_ROM: &str = "ROM images";
pub(super) const FILTER_JSON: &str = "JSON";
pub(super) const FILTER_ALL: &str = "All files";

// Widget captions
pub(super) const CAPTION_BUTTON_LOAD_ROM: &str = "Load ROM";
pub(super) const CAPTION_BUTTON_OPTIONS: &str = "Options";
pub(super) const CAPTION_BUTTON_RUN: &str = "▶";
pub(super) const CAPTION_BUTTON_PAUSE: &str = "⏸";
pub(super) const CAPTION_BUTTON_RESTART: &str = "⏮";
pub(super) const CAPTION_BUTTON_LOAD_OPTIONS: &str = "Load From File";
pub(super) const CAPTION_BUTTON_SAVE_OPTIONS: &str = "Save To File";
pub(super) const CAPTION_BUTTON_OK: &str = "OK";
pub(super) const CAPTION_BUTTON_CANCEL: &str = "Cancel";
pub(super) const CAPTION_HEADING_MACHINE: &str = "Machine";
pub(super) const CAPTION_HEADING_COMPATIBILITY: &str = "Compatibility";
pub(super) const CAPTION_HEADING_OPTIONS_LOAD_SAVE: &str = "Load / Save Options";
pub(super) const CAPTION_LABEL_RAM_SIZE: &str = "RAM size: ";
pub(super) const CAPTION_LABEL_AUDIO_SOURCE: &str = "Audio sample source: ";
pub(super) const CAPTION_LABEL_UNDEFINED_READS: &str = "Out-of-range RAM reads: ";
pub(super) const CAPTION_LABEL_EXECUTION_STATUS: &str = "Execution status: ";
pub(super) const CAPTION_LABEL_CYCLES_PER_SECOND: &str = "CPU cycles/s: ";
pub(super) const CAPTION_LABEL_ERROR: &str = "ERROR: ";
pub(super) const CAPTION_RADIO_RAM_32K: &str = "32K (standard)";
pub(super) const CAPTION_RADIO_RAM_64K: &str = "64K (expanded)";
pub(super) const CAPTION_RADIO_AUDIO_XOUT: &str = "Extended output (hardware)";
pub(super) const CAPTION_RADIO_AUDIO_ACC: &str = "Accumulator (legacy)";
pub(super) const CAPTION_RADIO_UNDEF_ZERO: &str = "Read zero";
pub(super) const CAPTION_RADIO_UNDEF_RANDOM: &str = "Read a random byte";

// Tooltips
pub(super) const TOOLTIP_BUTTON_LOAD_ROM: &str = "Load and run a Gigatron ROM image";
pub(super) const TOOLTIP_BUTTON_OPTIONS: &str = "Configure emulation options (restarts the machine)";
pub(super) const TOOLTIP_BUTTON_RUN: &str = "Resume emulation";
pub(super) const TOOLTIP_BUTTON_PAUSE: &str = "Pause emulation";
pub(super) const TOOLTIP_BUTTON_RESTART: &str = "Reset the machine and restart the loaded ROM";
pub(super) const TOOLTIP_BUTTON_LOAD_OPTIONS: &str = "Load emulation options from a JSON file";
pub(super) const TOOLTIP_BUTTON_SAVE_OPTIONS: &str = "Save emulation options to a JSON file";
pub(super) const TOOLTIP_LEDS: &str =
    "The machine's four status LEDs (low nibble of the extended output register)";

// Identifiers
pub(super) const ID_TOP_PANEL: &str = "top_panel";
pub(super) const ID_BOTTOM_PANEL: &str = "bottom_panel";
pub(super) const ID_OPTIONS_MODAL: &str = "options_modal";
pub(super) const ID_OPTIONS_MODAL_GRID: &str = "options_modal_grid";
pub(super) const ID_FRAME_TEXTURE: &str = "frame_texture";
