//! Fixed site parameters and working-directory layout.
//!
//! Everything here is compile-time constant. The article list is the whole
//! configuration surface of the tool; there are no flags, files, or
//! environment variables that change what gets harvested.

/// Origin prepended to site-relative attachment hrefs.
pub const SITE_ORIGIN: &str = "https://iflightrc.freshdesk.com";

/// Class token that marks attachment anchors in Freshdesk article markup.
pub const ATTACHMENT_MARKER_CLASS: &str = "filename";

/// Only hrefs under this path are attachment downloads; everything else
/// carrying the marker class is navigational and gets dropped.
pub const ATTACHMENT_PATH_PREFIX: &str = "/helpdesk/attachments/";

/// Download target directory, relative to the working directory.
pub const ASSETS_DIR: &str = "Assets";

/// Append-only ledger of downloaded URLs, one `<url> -> <filename>` per line.
pub const LEDGER_FILE: &str = "downloaded.txt";

/// Scratch file holding the concatenated markup of every rendered article.
/// Recreated on each run.
pub const DUMP_FILE: &str = "iflight.html";

/// Knowledge-base articles to harvest, in order.
pub const ARTICLE_URLS: &[&str] = &[
    "https://iflightrc.freshdesk.com/support/solutions/articles/48001227638-nazgul-evoque-f5-f6-v2",
    "https://iflightrc.freshdesk.com/support/solutions/articles/48001238224-nazgul5-v3",
    "https://iflightrc.freshdesk.com/support/solutions/articles/48001238921-ih3-o3",
    "https://iflightrc.freshdesk.com/support/solutions/articles/48001240698-defender-25-stl",
    "https://iflightrc.freshdesk.com/support/solutions/articles/48000843539-megabee-v1-duct-stl",
    "https://iflightrc.freshdesk.com/support/solutions/articles/48001171073-protek25-35-stl",
    "https://iflightrc.freshdesk.com/support/solutions/articles/48001171077-chimera7-chimera7-pro-stl",
    "https://iflightrc.freshdesk.com/support/solutions/articles/48001171079-alpha-c85-stl",
    "https://iflightrc.freshdesk.com/support/solutions/articles/48001171081-cidora-stl",
    "https://iflightrc.freshdesk.com/support/solutions/articles/48001177394-insta360-go2-stl",
    "https://iflightrc.freshdesk.com/support/solutions/articles/48000842773-megabee-v2-duct-stl",
    "https://iflightrc.freshdesk.com/support/solutions/articles/48001231384-chimera5-stl",
    "https://iflightrc.freshdesk.com/support/solutions/articles/48001231457-protek-r20-r25-stl",
    "https://iflightrc.freshdesk.com/support/solutions/articles/48001232723-xl7-xl8-xl10-v5-tpu",
    "https://iflightrc.freshdesk.com/support/solutions/articles/48001254305-xl5-v5-nazgul5-v2",
    "https://iflightrc.freshdesk.com/support/solutions/articles/48000847301-beetle-fpv-camera-stl",
    "https://iflightrc.freshdesk.com/support/solutions/articles/48001151082-alpha-insta-cam-adapter-stl",
    "https://iflightrc.freshdesk.com/support/solutions/articles/48001260838-nazgul-evoque-f5-v2-bnf-drone-user-manual",
    "https://iflightrc.freshdesk.com/support/solutions/articles/48001258885-mach-r5-sport-bnf-drone-user-manual",
    "https://iflightrc.freshdesk.com/support/solutions/articles/48001260837-chimera7-pro-v2-bnf-drone-user-manual",
    "https://iflightrc.freshdesk.com/support/solutions/articles/48001260839-taurus-x8-pro-max-bnf-drone-user-manual",
    "https://iflightrc.freshdesk.com/support/solutions/articles/48001256219-defender-series-bnf-drone-setup-guide",
    "https://iflightrc.freshdesk.com/support/solutions/articles/48001062628-bumblebee-hd-bnf-drone-setup-guide",
    "https://iflightrc.freshdesk.com/support/solutions/articles/48001270904-sh-series-user-manual",
    "https://iflightrc.freshdesk.com/support/solutions/articles/48001152792-nazgul-xl5-hd-xing-tuning-bible",
    "https://iflightrc.freshdesk.com/support/solutions/articles/48001152913-alpha-a85-4-2-x-tune-rc1",
    "https://iflightrc.freshdesk.com/support/solutions/articles/48001167867-protek25-xing-tune",
    "https://iflightrc.freshdesk.com/support/solutions/articles/48001188778-protek25-pusher-xing-tune",
];
