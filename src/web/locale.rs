//! UI text for the form page.
//!
//! The page markup, styling and script are shared; only the strings below
//! differ between languages.

use std::fmt;
use std::str::FromStr;

/// Language of the form page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Id,
}

impl Locale {
    /// Returns the string table for this locale.
    pub fn text(self) -> &'static LocaleText {
        match self {
            Locale::En => &EN,
            Locale::Id => &ID,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Id => "id",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when parsing an unsupported locale code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale '{0}', expected 'en' or 'id'")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "id" => Ok(Locale::Id),
            other => Err(UnknownLocale(other.to_string())),
        }
    }
}

/// Every user-visible string on the form page.
#[derive(Debug)]
pub struct LocaleText {
    pub title: &'static str,
    pub heading: &'static str,
    pub register_link: &'static str,
    pub email_label: &'static str,
    pub email_placeholder: &'static str,
    pub email_error: &'static str,
    pub zone_id_label: &'static str,
    pub zone_id_placeholder: &'static str,
    pub zone_id_error: &'static str,
    /// Shown by the script when the zone id is empty; wording differs from
    /// the static hint in the Indonesian text.
    pub zone_id_required: &'static str,
    pub api_key_label: &'static str,
    pub api_key_placeholder: &'static str,
    pub api_key_error: &'static str,
    pub submit_label: &'static str,
    pub submitting_label: &'static str,
    /// Button text restored after a request completes.
    pub submit_idle_label: &'static str,
    pub instructions_title: &'static str,
    pub instructions: &'static [&'static str],
    pub footer_notice: &'static str,
    pub success_message: &'static str,
    pub failure_prefix: &'static str,
    pub network_error: &'static str,
}

static EN: LocaleText = LocaleText {
    title: "IP6.ARPA Automatically add SSL certificate to domain name",
    heading: "Automatically add SSL certificate to domain name",
    register_link: "Register the domain name free",
    email_label: "Cloudflare Register Email (Email)",
    email_placeholder: "Please enter your Cloudflare email address",
    email_error: "Please enter a valid email address",
    zone_id_label: "Region ID (Zone ID)",
    zone_id_placeholder: "Please enter your region ID",
    zone_id_error: "Please enter the region ID",
    zone_id_required: "Please enter the region ID",
    api_key_label: "Global API Key (API Key)",
    api_key_placeholder: "Please enter your API key",
    api_key_error: "Please enter your API key",
    submit_label: "Adding an SSL Certificate",
    submitting_label: "Adding...",
    submit_idle_label: "Adding an SSL Certificate",
    instructions_title: "Instructions",
    instructions: &[
        "1. Please ensure that you have entered the correct Cloudflare account information.",
        "2. Please make sure your ip6.arpa domain is activated in Cloudflare before adding it.",
        "3. After adding successfully, please wait for 10 minutes and then check the SSL/TLS certificate in the domain menu",
        "4. This tool uses the Cloudflare API to add an SSL certificate to your IPV6 domain",
    ],
    footer_notice: "Notice: Your API key is only used for this request, Will not be stored",
    success_message: "Certificate added successfully, Please check the SSL/TLS certificate for this domain in Cloudflare after 10 minutes.",
    failure_prefix: "Failed to add certificate",
    network_error: "Request failed, Please check your network connection",
};

static ID: LocaleText = LocaleText {
    title: "Tambahkan sertifikat SSL secara otomatis ke nama domain",
    heading: "Tambahkan sertifikat SSL secara otomatis ke nama domain",
    register_link: "Daftarkan nama domain gratis",
    email_label: "Alamat Email Cloudflare Anda (Email)",
    email_placeholder: "Silakan masukkan alamat email Cloudflare Anda",
    email_error: "Silakan masukkan alamat email yang valid",
    zone_id_label: "ID Zone Domain (Zone ID)",
    zone_id_placeholder: "Silakan masukkan ID Zone Domain Anda",
    zone_id_error: "Silakan masukkan ID Zone yang valid",
    zone_id_required: "Silakan masukkan ID wilayah",
    api_key_label: "Kunci API Global (API Key)",
    api_key_placeholder: "Silakan masukkan kunci API Anda",
    api_key_error: "Silakan masukkan kunci API Anda",
    submit_label: "Tambahkan Sertifikat SSL",
    submitting_label: "Adding...",
    submit_idle_label: "Menambahkan Sertifikat SSL",
    instructions_title: "Instruksi",
    instructions: &[
        "1. Pastikan Anda telah memasukkan informasi akun Cloudflare yang benar.",
        "2. Pastikan domain ip6.arpa Anda diaktifkan di Cloudflare sebelum menambahkannya.",
        "3. Setelah berhasil menambahkan, harap tunggu 10 menit lalu periksa sertifikat SSL/TLS di menu domain",
        "4. Alat ini menggunakan Cloudflare API untuk menambahkan sertifikat SSL ke domain IPV6 Anda",
    ],
    footer_notice: "Perhatian: Kunci API Anda hanya digunakan untuk permintaan ini, Tidak akan disimpan",
    success_message: "Sertifikat berhasil ditambahkan, Silakan periksa sertifikat SSL/TLS untuk domain ini di Cloudflare setelah 10 menit.",
    failure_prefix: "Gagal menambahkan sertifikat",
    network_error: "Permintaan gagal, Harap periksa koneksi jaringan Anda",
};
