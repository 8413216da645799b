//! # Quickstart Example
//!
//! Minimal example demonstrating the basics of `iso15118-exi`:
//! - Build a `SessionSetupReq` message tree
//! - Encode it to an EXI byte stream
//! - Decode the stream back and confirm it round-trips
//! - Inspect a decode failure (capacity violation)
//!
//! This example uses `std` for a quick trial run; the crate itself is
//! `no_std` (see the README for the embedded integration shape).
//!
//! ```bash
//! cargo run --example quickstart
//! ```
use iso15118_exi::core::FixedBytes;
use iso15118_exi::protocol::document::{decode_document, encode_document, ExiDocument, V2GMessage};
use iso15118_exi::protocol::messages::body::Body;
use iso15118_exi::protocol::messages::header::Header;
use iso15118_exi::protocol::messages::session_setup::SessionSetupReq;

fn main() {
    println!("=== iso15118-exi Quickstart ===\n");

    // ======================================================================
    // 1. Build a SessionSetupReq message tree
    // ======================================================================
    println!("1. Building a SessionSetupReq");

    let evcc_id = FixedBytes::from_slice(&[0x01, 0x02, 0x03, 0x04, 0x05, 0x06])
        .expect("6 bytes fits the EVCCID capacity");
    let message = V2GMessage {
        header: Header {
            session_id: FixedBytes::from_slice(&[0xAA; 8]).expect("8 bytes of session id"),
            notification: None,
            signature: None,
        },
        body: Body::SessionSetupReq(SessionSetupReq { evcc_id }),
    };
    let document = ExiDocument::V2GMessage(message);
    println!("   EVCCID: {:02X?}\n", evcc_id.as_slice());

    // ======================================================================
    // 2. Encode to an EXI byte stream
    // ======================================================================
    println!("2. Encoding the document");

    let mut buffer = [0u8; 64];
    let written = encode_document(&document, &mut buffer).expect("encode never fails here");
    println!("   Encoded: {} bytes", written);
    print!("   Payload: ");
    for byte in &buffer[..written] {
        print!("{:02X} ", byte);
    }
    println!("\n");

    // ======================================================================
    // 3. Decode the stream back
    // ======================================================================
    println!("3. Decoding the payload");

    match decode_document(&buffer[..written]) {
        Ok(decoded) => {
            let ExiDocument::V2GMessage(decoded_message) = decoded;
            println!("   Round-trip matches: {}", decoded_message == message);
        }
        Err(e) => eprintln!("   Decode error: {:?}", e),
    }

    // ======================================================================
    // 4. A malformed stream: wrong EXI header byte
    // ======================================================================
    println!("\n4. Decoding a malformed stream (wrong header byte)");

    let mut bad_buffer = buffer;
    bad_buffer[0] = 0x00;
    match decode_document(&bad_buffer[..written]) {
        Ok(_) => println!("   (unexpectedly succeeded)"),
        Err(e) => println!("   Rejected as expected: {:?}", e),
    }

    println!("\nQuickstart complete.");
}
