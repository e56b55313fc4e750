// src/gui/actions/export.rs
use crate::{file, gui::app::App};

pub fn export(app: &mut App) {
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        logf!("Export: Out path set → {}", app.state.options.export.out_path().display());
        app.out_path_dirty = false;
    }

    let msg = match file::write_export(&app.state.options.export, app.report.as_ref()) {
        Ok(path) => format!("Exported {}", path.display()),
        Err(e) => {
            loge!("Export: Error: {}", e);
            format!("Export error: {e}")
        }
    };

    // Reflect the normalized path (extension follows format).
    app.out_path_text = app.state.options.export.out_path().to_string_lossy().into_owned();
    app.status(msg);
}
