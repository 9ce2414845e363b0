use console::Style;
use once_cell::sync::Lazy;

pub struct JukeboxTheme {
    pub banner: Style,
    pub header: Style,
    pub id: Style,
    pub title: Style,
    pub artist: Style,
    pub exit_option: Style,
    pub now_playing: Style,
    pub snippet: Style,
    pub info: Style,
    pub success: Style,
    pub warning: Style,
    pub error: Style,
}

pub static JUKEBOX_THEME: Lazy<JukeboxTheme> = Lazy::new(|| JukeboxTheme {
    banner: Style::new().bold().magenta(),
    header: Style::new().cyan(),
    id: Style::new().yellow(),
    title: Style::new().bold(),
    artist: Style::new(),
    exit_option: Style::new().red(),
    now_playing: Style::new().green().bold(),
    snippet: Style::new().italic(),
    info: Style::new().dim(),
    success: Style::new().green(),
    warning: Style::new().yellow(),
    error: Style::new().red(),
});
