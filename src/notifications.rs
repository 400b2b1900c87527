/// Desktop notifications. Only macOS is implemented; elsewhere this is a no-op.

#[cfg(target_os = "macos")]
use std::process::Command;

/// Send a notification when a pomodoro phase starts or the cycle ends
pub fn notify_phase(title: &str, message: &str) {
    #[cfg(target_os = "macos")]
    {
        let script = format!(
            r#"display notification "{}" with title "StudyDesk - {}""#,
            message.replace('"', "\\\""),
            title.replace('"', "\\\"")
        );

        let _ = Command::new("osascript").arg("-e").arg(&script).output();
    }

    #[cfg(not(target_os = "macos"))]
    {
        let _ = (title, message);
    }
}
