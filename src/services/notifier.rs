//! Phase transition notifiers

use tokio::{process::Command, runtime::Handle};
use tracing::{debug, info, warn};

use crate::timer::{Notifier, Transition};

/// Plays a sound through an external audio player on every transition
#[derive(Debug, Clone)]
pub struct SoundNotifier {
    pub player: String,
    pub sound: String,
}

impl SoundNotifier {
    pub fn new(player: impl Into<String>, sound: impl Into<String>) -> Self {
        Self {
            player: player.into(),
            sound: sound.into(),
        }
    }
}

impl Notifier for SoundNotifier {
    fn notify(&self, transition: Transition) {
        let Ok(handle) = Handle::try_current() else {
            warn!("No async runtime available, skipping {} sound", transition);
            return;
        };

        let player = self.player.clone();
        let sound = self.sound.clone();
        handle.spawn(async move {
            if let Err(e) = play_sound(&player, &sound).await {
                // Playback failures never reach the timer
                warn!("Notification sound for {} failed: {}", transition, e);
            }
        });
    }
}

/// Run the audio player on a sound file
pub async fn play_sound(player: &str, sound: &str) -> Result<(), String> {
    debug!("Playing {} with {}", sound, player);

    let output = Command::new(player)
        .arg(sound)
        .output()
        .await
        .map_err(|e| format!("Failed to execute {}: {}", player, e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!("{} failed: {}", player, stderr.trim()));
    }

    Ok(())
}

/// Logs transitions instead of playing a sound
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, transition: Transition) {
        match transition {
            Transition::ToBreak => info!("Break time! Look at something 20 feet away for 20 seconds"),
            Transition::ToWork => info!("Break over, back to work"),
        }
    }
}
