//! Count feed receive task
//!
//! Reads count lines from UART0 (the USB serial bridge on the CYD) and
//! publishes each parsed value.

use defmt::*;
use embassy_time::Timer;
use embedded_io_async::Read;
use esp_hal::uart::UartRx;
use esp_hal::Async;

use subcount_core::feed::CountParser;

use crate::channels::SUBSCRIBER_COUNT;

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 64;

/// Feed RX task - parses count lines and signals the render loop
#[embassy_executor::task]
pub async fn feed_rx_task(mut rx: UartRx<'static, Async>) {
    info!("Feed RX task started");

    let mut parser = CountParser::new();
    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) => {
                trace!("RX: {} bytes", n);

                for &byte in &buf[..n] {
                    match parser.feed(byte) {
                        Ok(Some(count)) => {
                            debug!("Count received: {}", count);
                            SUBSCRIBER_COUNT.signal(count);
                        }
                        Ok(None) => {}
                        Err(e) => {
                            warn!("Feed parse error: {:?}", e);
                        }
                    }
                }
            }
            Err(e) => {
                warn!("UART read error: {:?}", Debug2Format(&e));
                // Whatever was buffered may be corrupt
                parser.reset();
                Timer::after_millis(10).await;
            }
        }
    }
}
