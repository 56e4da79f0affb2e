//! One-shot MLLP sender: frames a sample ADT message and sends it over TCP.
//!
//! Run with:
//!   cargo run --example send -- 127.0.0.1:2575
//!
//! The address defaults to 127.0.0.1:2575 (the registered MLLP port). Set
//! HL7_MLLP_CHARSET to send the payload in an encoding other than UTF-8.

use std::net::TcpStream;
use std::time::Duration;

use hl7_mllp::{MllpWriter, WriterConfig};

const SAMPLE_ADT: &str = concat!(
    "MSH|^~\\&|HIS|RIH|EKG|EKG|199904140038||ADT^A01|12345|P|2.2\r",
    "PID|||555-44-4444||EVERYWOMAN^EVE^E^^^^L|JONES|19620320|F|||153 FERNWOOD DR^",
    "^STATESVILLE^OH^35292||(206)3345232|(206)752-121||||AC555444444||67-A4335^OH^20030520\r",
    "NK1|1|NUCLEAR^NELDA^W|SPO^SPOUSE||||NK^NEXT OF KIN\r",
    "PV1|1|I|2000^2012^01||||004777^ATTEND^AARON^A|||SUR||||ADM|A0"
);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let addr = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "127.0.0.1:2575".to_string());

    let config = WriterConfig::from_env()?;

    let stream = TcpStream::connect(&addr)?;
    stream.set_write_timeout(Some(Duration::from_secs(5)))?;
    eprintln!("Connected to {addr}");

    let mut writer = MllpWriter::with_config(stream, config);
    writer.write_message(SAMPLE_ADT)?;
    eprintln!("Sent ADT^A01 sample as one MLLP frame");

    writer.close();
    Ok(())
}
