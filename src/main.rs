//! hfs-volume
//!
//! Command-line browser for HFS, HFS+ and HFSX volume images.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use hfs_volume::config::get_config;
use hfs_volume::types::mac_time_to_unix;
use hfs_volume::{ByteSource, FormatKind, ForkType, HfsError, ReaderConfig, Result, StreamSource, SubRangeSource, Volume};

/// Read-only browser for classic Mac volume images
#[derive(Parser)]
#[command(name = "hfs-volume")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Volume format: hfs, hfs+ or hfsx (default: detect from the signature)
    #[arg(long, global = true)]
    format: Option<String>,

    /// Byte offset of the volume inside the image (e.g. a partition start)
    #[arg(long, global = true, default_value_t = 0)]
    offset: u64,

    /// Length of the volume in bytes (default: to the end of the image)
    #[arg(long, global = true)]
    length: Option<u64>,

    /// Script of HFS names: MacRoman or MacJapanese
    #[arg(long, global = true)]
    encoding: Option<String>,

    /// Read the image without the block cache
    #[arg(long, global = true)]
    no_cache: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the volume header summary
    Info {
        #[arg(value_name = "IMAGE")]
        image: PathBuf,
    },

    /// List a folder
    Ls {
        #[arg(value_name = "IMAGE")]
        image: PathBuf,

        #[arg(default_value = "/")]
        path: String,
    },

    /// Write a file's fork to stdout
    Cat {
        #[arg(value_name = "IMAGE")]
        image: PathBuf,

        path: String,

        /// Read the resource fork instead of the data fork
        #[arg(long)]
        rsrc: bool,
    },

    /// Print the catalog record of a path
    Stat {
        #[arg(value_name = "IMAGE")]
        image: PathBuf,

        path: String,
    },
}

impl Cli {
    fn config(&self) -> ReaderConfig {
        let mut config = get_config().clone();
        if let Some(encoding) = &self.encoding {
            config.hfs_encoding = encoding.clone();
        }
        if self.no_cache {
            config.cache.enabled = false;
        }
        config
    }

    fn open(&self, image: &Path) -> Result<Volume> {
        let config = self.config();
        let file = StreamSource::open(image)?;
        let source: Box<dyn ByteSource> = if self.offset > 0 || self.length.is_some() {
            let length = match (self.length, file.length()) {
                (Some(length), _) => length,
                (None, Some(total)) => total.saturating_sub(self.offset),
                (None, None) => return Err(HfsError::usage("--length is required for a source of unknown size")),
            };
            Box::new(SubRangeSource::new(file, self.offset, length)?)
        } else {
            Box::new(file)
        };

        match &self.format {
            Some(name) => {
                let kind = FormatKind::from_name(name)
                    .ok_or_else(|| HfsError::usage(format!("unknown format '{}' (use hfs, hfs+ or hfsx)", name)))?;
                Volume::open(kind, source, &config)
            }
            None => Volume::open_detected(source, &config),
        }
    }
}

fn info(volume: &mut Volume) -> Result<()> {
    let header = volume.header().clone();
    println!("Format:        {}", volume.format_kind());
    println!("Name:          {}", volume.volume_name());
    println!("Block size:    {}", header.block_size);
    println!("Total blocks:  {}", header.total_blocks);
    println!("Free blocks:   {} (bitmap: {})", header.free_blocks, volume.count_free_blocks()?);
    println!("Files:         {}", header.file_count);
    println!("Folders:       {}", header.folder_count);
    println!("Next CNID:     {}", header.next_catalog_id);
    println!("Modified:      {} (Unix)", mac_time_to_unix(header.dates.modified));
    println!("Journaled:     {}", header.is_journaled());
    if let Some(stats) = volume.cache_stats() {
        println!("Cache:         {} hits, {} misses", stats.hits, stats.misses);
    }
    Ok(())
}

fn ls(volume: &mut Volume, path: &str) -> Result<()> {
    let cnid = volume.resolve_path(path)?;
    for leaf in volume.list_children(cnid)? {
        let name = volume.display_name(&leaf)?;
        match leaf.as_file() {
            Some(file) => println!(
                "{:>10} {:>8} {}{}  {}",
                file.data_fork.logical_size,
                file.resource_fork.logical_size,
                file.finder_info.type_code(),
                file.finder_info.creator_code(),
                name
            ),
            None => println!("{:>10} {:>8} {:8}  {}/", "-", "-", "", name),
        }
    }
    Ok(())
}

fn cat(volume: &mut Volume, path: &str, fork: ForkType) -> Result<()> {
    let mut reader = volume.open_file(path, fork)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    std::io::copy(&mut reader, &mut out)?;
    out.flush()?;
    Ok(())
}

fn stat(volume: &mut Volume, path: &str) -> Result<()> {
    let leaf = volume.entry_at_path(path)?;
    println!("{:#?}", leaf);
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Info { image } => info(&mut cli.open(image)?),
        Commands::Ls { image, path } => ls(&mut cli.open(image)?, path),
        Commands::Cat { image, path, rsrc } => {
            let fork = if *rsrc { ForkType::Resource } else { ForkType::Data };
            cat(&mut cli.open(image)?, path, fork)
        }
        Commands::Stat { image, path } => stat(&mut cli.open(image)?, path),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("hfs-volume: {}", e);
            ExitCode::FAILURE
        }
    }
}
