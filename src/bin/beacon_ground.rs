use clap::{App, Arg};
use colored::Colorize;
use telebeacon::{decode_into, describe, Snapshot, WirePacket};
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let matches = App::new("beacon-ground")
        .version("0.1.0")
        .about("Ground-side beacon client: receives, decodes, and renders beacons")
        .arg(
            Arg::with_name("host")
                .short("H")
                .long("host")
                .value_name("HOST")
                .help("Agent host to connect to")
                .takes_value(true)
                .default_value("127.0.0.1"),
        )
        .arg(
            Arg::with_name("port")
                .short("p")
                .long("port")
                .value_name("PORT")
                .help("Agent beacon port")
                .takes_value(true)
                .default_value("8081"),
        )
        .arg(
            Arg::with_name("raw")
                .short("r")
                .long("raw")
                .help("Print raw decoded JSON instead of the annotated line"),
        )
        .get_matches();

    let host = matches.value_of("host").unwrap_or("127.0.0.1");
    let port = matches.value_of("port").unwrap_or("8081");
    let raw = matches.is_present("raw");

    let addr = format!("{}:{}", host, port);
    info!("connecting to {}", addr);
    let mut stream = TcpStream::connect(&addr).await?;
    println!("{}", format!("connected to {}", addr).green().bold());

    // Ground mirror of the node state, rebuilt beacon by beacon.
    let mut mirror: Option<Snapshot> = None;

    let mut len_buf = [0u8; 2];
    loop {
        if stream.read_exact(&mut len_buf).await.is_err() {
            println!("{}", "link closed".yellow());
            return Ok(());
        }
        let frame_len = u16::from_le_bytes(len_buf) as usize;
        let mut frame_buf = vec![0u8; frame_len];
        stream.read_exact(&mut frame_buf).await?;

        let packet = match WirePacket::from_bytes(&frame_buf) {
            Ok(p) => p,
            Err(e) => {
                warn!("bad frame: {}", e);
                println!("{}", "[Unknown Beacon]".red());
                continue;
            }
        };
        let payload = match packet.unwrap_beacon() {
            Ok(p) => p,
            Err(e) => {
                warn!("frame rejected: {}", e);
                println!("{}", "[Unknown Beacon]".red());
                continue;
            }
        };

        let origin = packet.origin.as_str();
        let snap = mirror.get_or_insert_with(|| Snapshot::new(origin));
        match decode_into(payload, snap) {
            Ok(ty) => {
                if raw {
                    println!("{}", describe(payload, origin));
                } else {
                    let line = describe(payload, origin);
                    println!(
                        "{} {} {}",
                        format!("[{}]", origin).cyan(),
                        format!("met={:.1}s", snap.node.met).dimmed(),
                        line
                    );
                }
                info!("RX {} ({} bytes)", ty.name(), payload.len());
            }
            Err(e) => {
                warn!("decode failed: {}", e);
                println!("{} {}", format!("[{}]", origin).cyan(), describe(payload, origin).red());
            }
        }
    }
}
