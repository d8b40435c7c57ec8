//! Pure Dekodier-Logik
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use crate::traits::GpioError;
use crate::types::LedCommand;

/// Kommando-Code: LED einschalten (Magic 'L' im oberen Byte)
pub const CMD_LED_ON: u32 = (b'L' as u32) << 8 | 0x01;

/// Kommando-Code: LED ausschalten
pub const CMD_LED_OFF: u32 = (b'L' as u32) << 8 | 0x02;

/// Fester Offset zwischen Roh-Argument und logischem Index
///
/// Ein Argument von 7 adressiert Leitung 0, 8 adressiert Leitung 1 usw.
pub const ARG_INDEX_OFFSET: u64 = 7;

/// Fehler-Typ für den Kommando-Dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DispatchError {
    /// Kommando-Code ist keiner der definierten Codes
    UnsupportedCommand(u32),
    /// Argument ergibt keinen gültigen logischen Index
    InvalidArgument(u64),
    /// Pegel-Schreiben auf der Hardware fehlgeschlagen
    Gpio(GpioError),
}

impl From<GpioError> for DispatchError {
    fn from(err: GpioError) -> Self {
        DispatchError::Gpio(err)
    }
}

/// Dekodiert ein (Kommando, Argument)-Paar zu einem [`LedCommand`]
///
/// Der Kommando-Code wird zuerst geprüft: ein unbekannter Code meldet
/// `UnsupportedCommand` unabhängig vom Argument (wie das switch-default
/// im originalen ioctl-Handler). Ein Argument unterhalb des Offsets
/// meldet `InvalidArgument`; die obere Bereichsgrenze prüft erst die
/// Registry beim Auflösen.
///
/// # Beispiele
///
/// ```
/// # use gec_core::logic::{decode_command, CMD_LED_ON};
/// # use gec_core::types::LedCommand;
/// let cmd = decode_command(CMD_LED_ON, 7).unwrap();
/// assert_eq!(cmd, LedCommand::TurnOn(0));
/// ```
pub fn decode_command(code: u32, raw_arg: u64) -> Result<LedCommand, DispatchError> {
    match code {
        CMD_LED_ON => Ok(LedCommand::TurnOn(decode_index(raw_arg)?)),
        CMD_LED_OFF => Ok(LedCommand::TurnOff(decode_index(raw_arg)?)),
        other => Err(DispatchError::UnsupportedCommand(other)),
    }
}

/// Rechnet das Roh-Argument in einen logischen Index um
fn decode_index(raw_arg: u64) -> Result<u64, DispatchError> {
    raw_arg
        .checked_sub(ARG_INDEX_OFFSET)
        .ok_or(DispatchError::InvalidArgument(raw_arg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Level;

    #[test]
    fn test_decode_turn_on_first_line() {
        let cmd = decode_command(CMD_LED_ON, 7).unwrap();
        assert_eq!(cmd, LedCommand::TurnOn(0));
        assert_eq!(cmd.level(), Level::Low);
    }

    #[test]
    fn test_decode_turn_off_last_line() {
        let cmd = decode_command(CMD_LED_OFF, 10).unwrap();
        assert_eq!(cmd, LedCommand::TurnOff(3));
        assert_eq!(cmd.level(), Level::High);
    }

    #[test]
    fn test_decode_offset_mapping() {
        for arg in 7..=10 {
            let cmd = decode_command(CMD_LED_ON, arg).unwrap();
            assert_eq!(cmd.index(), arg - ARG_INDEX_OFFSET);
        }
    }

    #[test]
    fn test_decode_unsupported_command() {
        let result = decode_command(0xDEAD, 7);
        assert_eq!(result, Err(DispatchError::UnsupportedCommand(0xDEAD)));
    }

    #[test]
    fn test_decode_unsupported_command_wins_over_bad_argument() {
        // Unbekannter Code wird vor dem Argument geprüft
        let result = decode_command(0, 0);
        assert_eq!(result, Err(DispatchError::UnsupportedCommand(0)));
    }

    #[test]
    fn test_decode_argument_below_offset() {
        for arg in 0..ARG_INDEX_OFFSET {
            let result = decode_command(CMD_LED_ON, arg);
            assert_eq!(result, Err(DispatchError::InvalidArgument(arg)));
        }
    }

    #[test]
    fn test_decode_large_index_passes_through() {
        // Obere Grenze prüft die Registry, nicht der Decoder
        let cmd = decode_command(CMD_LED_OFF, 100).unwrap();
        assert_eq!(cmd, LedCommand::TurnOff(93));
    }
}
