use clap::Parser;

use crate::mirror::DEFAULT_MIRROR;

#[derive(Parser, Debug)]
#[command(name = "debcontents")]
#[command(version)]
#[command(about = "Rank Debian packages by the number of files they ship", long_about = None)]
#[command(after_help = "Examples:\n  \
  debcontents amd64                     top 10 packages on amd64\n  \
  debcontents -n 25 arm64               top 25 packages on arm64\n  \
  debcontents mips --mirror ./mirror    read ./mirror/Contents-mips.gz")]
pub struct Cli {
    /// Architecture name (e.g. amd64, arm64, mips)
    #[arg(value_name = "ARCH")]
    pub arch: String,

    /// Number of top packages to display
    #[arg(short = 'n', long = "top", value_name = "N", default_value_t = 10)]
    pub top: usize,

    /// Base URL of the Debian mirror, or a local directory
    #[arg(long, value_name = "URL", env = "DEBIAN_MIRROR", default_value = DEFAULT_MIRROR)]
    pub mirror: String,
}
