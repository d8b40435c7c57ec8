// Demo: LED-Modul installieren, alle vier LEDs schalten, wieder entfernen

use gec_core::{ARG_INDEX_OFFSET, CMD_LED_OFF, CMD_LED_ON, LINE_COUNT};
use gec_device::config::LINE_TABLE;
use gec_device::{SimBank, module_start, module_stop};
use log::info;

fn main() {
    env_logger::init();

    // Bank-Handle behalten, um Pegel von außen zu beobachten
    let bank = SimBank::new();
    let mut module = module_start(bank.clone()).expect("failed to install LED module");

    // Session öffnen: konfiguriert alle Leitungen als Ausgang (LED aus)
    let mut session = module
        .device()
        .open()
        .expect("failed to configure lines as outputs");

    // Jede LED einmal ein- und ausschalten
    for index in 0..LINE_COUNT as u64 {
        let arg = index + ARG_INDEX_OFFSET;
        session.dispatch(CMD_LED_ON, arg).expect("dispatch LED_ON");
        let line = LINE_TABLE.resolve(index).expect("valid index");
        info!(
            "line {index} ({}) -> {:?}",
            line.name,
            bank.level(line.physical_id)
        );
        session.dispatch(CMD_LED_OFF, arg).expect("dispatch LED_OFF");
    }

    // Byte-Transfers: write ist rein informativ, read liefert den
    // festen Payload
    let written = session.write(b"hello from userspace").expect("write");
    info!("wrote {written} bytes");
    let mut buf = [0u8; 34];
    let read = session.read(&mut buf).expect("read");
    info!("read {read} bytes: {}", String::from_utf8_lossy(&buf));

    session.close();
    module_stop(module);
}
