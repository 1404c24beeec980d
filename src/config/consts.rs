// src/config/consts.rs

// Site
pub const BASE_URL: &str = "https://bullsconnect.usf.edu";
pub const DEFAULT_IMAGE_PATH: &str = "/images/listing-default.png";
pub const NAME_PLACEHOLDER: &str = "[firstName]";
pub const UNKNOWN_CLUB: &str = "Unknown Club";

/// Default photos served by the portal for people without an upload.
pub const PLACEHOLDER_FRAGMENTS: [&str; 2] = ["male_user_large.png", "female_user_large.png"];

pub const DEFAULT_CLUB_IDS: [u32; 8] = [71725, 58067, 71500, 58047, 58175, 58631, 71550, 71437];

// Browser waits (fixed, not adaptive)
pub const RENDER_WAIT_MS: u64 = 3_000;
pub const TAB_WAIT_MS: u64 = 2_000;

// Photo downloads
pub const HTTP_TIMEOUT_SECS: u64 = 30;

// Labels
pub const BOARD_PREFIX: &str = "ES";
pub const LABEL_SEP: &str = " ::: ";

// Export
pub const DEFAULT_OUT_DIR: &str = ".";
pub const CSV_FILE: &str = "club_contacts.csv";
pub const HTML_FILE: &str = "officers.html";
pub const PHOTOS_DIR: &str = "officer_photos";
pub const CONTACTS_IMPORT_URL: &str = "https://contacts.google.com/";

// Local debug log
pub const STORE_DIR: &str = ".store";
pub const DEBUG_LOG_FILE: &str = "debug.log";
