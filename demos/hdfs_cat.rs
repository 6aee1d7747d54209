#[macro_use]
extern crate log;

use std::io::{self, Read, Write};

use argh::FromArgs;
use hdrs::ClientBuilder;
use remotefs_hdfs::{HdfsReader, ReadSeekClose};

#[derive(FromArgs)]
#[argh(description = "
print a byte range of an HDFS file to stdout

Please, report issues to <https://github.com/remotefs-rs/remotefs-rs-hdfs>")]
struct Args {
    #[argh(
        option,
        short = 'n',
        default = r#""default".to_string()"#,
        description = "namenode address (hdfs://host:port or \"default\")"
    )]
    namenode: String,
    #[argh(option, short = 'u', description = "connect as user")]
    user: Option<String>,
    #[argh(
        option,
        short = 'o',
        default = "0",
        description = "offset to start reading from"
    )]
    offset: u64,
    #[argh(option, short = 'l', description = "amount of bytes to print")]
    length: Option<u64>,
    #[argh(positional, description = "path of the file to print")]
    path: String,
}

fn main() -> anyhow::Result<()> {
    assert!(env_logger::builder().try_init().is_ok());
    let args: Args = argh::from_env();

    info!("connecting to namenode {}...", args.namenode);
    let mut builder = ClientBuilder::new(&args.namenode);
    if let Some(user) = args.user.as_deref() {
        builder = builder.with_user(user);
    }
    let client = builder.connect()?;
    info!("client connected");

    let mut reader = HdfsReader::open(&client, &args.path)?;
    reader.seek_to(args.offset)?;
    debug!("reading {} from {}", args.path, reader.position()?);

    let mut stdout = io::stdout().lock();
    let copied = match args.length {
        Some(length) => io::copy(&mut (&mut reader).take(length), &mut stdout)?,
        None => io::copy(&mut reader, &mut stdout)?,
    };
    stdout.flush()?;
    info!("printed {} bytes", copied);

    reader.close()?;
    Ok(())
}
