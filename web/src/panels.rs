use concentration_core::BoardSize;
use yew::prelude::*;

/// `MM:SS`, minutes keep growing past an hour
pub(crate) fn format_clock(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[derive(Properties, PartialEq)]
pub(crate) struct HeaderProps {
    pub sound_enabled: bool,
    pub on_toggle_sound: Callback<()>,
    pub on_restart: Callback<()>,
}

#[function_component]
pub(crate) fn Header(props: &HeaderProps) -> Html {
    let on_toggle_sound = props.on_toggle_sound.reform(|_: MouseEvent| ());
    let on_restart = props.on_restart.reform(|_: MouseEvent| ());
    let (sound_icon, sound_title) = if props.sound_enabled {
        ("🔊", "Turn sound off")
    } else {
        ("🔇", "Turn sound on")
    };

    html! {
        <header>
            <h1>{"Memory Card Game"}</h1>
            <nav>
                <button class="sound" title={sound_title} onclick={on_toggle_sound}>{sound_icon}</button>
                <button class="restart" onclick={on_restart}>{"↻ Restart"}</button>
            </nav>
        </header>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct StatsProps {
    pub elapsed_secs: u32,
    pub moves: u32,
    pub board_size: BoardSize,
    pub on_board_size: Callback<BoardSize>,
}

#[function_component]
pub(crate) fn Stats(props: &StatsProps) -> Html {
    html! {
        <section class="stats">
            <aside class="clock">{format_clock(props.elapsed_secs)}</aside>
            <span class="board-size">
                <strong>{"Board Size:"}</strong>
                {
                    for BoardSize::ALL.into_iter().map(|size| {
                        let onclick = props.on_board_size.reform(move |_: MouseEvent| size);
                        let class = classes!((size == props.board_size).then_some("selected"));
                        html! {
                            <button {class} {onclick}>{size.label()}</button>
                        }
                    })
                }
            </span>
            <aside class="moves">{"Moves: "}<b>{props.moves}</b></aside>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct CompletionProps {
    pub elapsed_secs: u32,
    pub moves: u32,
}

#[function_component]
pub(crate) fn CompletionBanner(props: &CompletionProps) -> Html {
    html! {
        <footer class="completed">
            {completion_message(props.elapsed_secs, props.moves)}
        </footer>
    }
}

fn completion_message(elapsed_secs: u32, moves: u32) -> String {
    format!(
        "Congratulations! You completed the game in {} with {} moves.",
        format_clock(elapsed_secs),
        moves
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_pads_minutes_and_seconds() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(9), "00:09");
        assert_eq!(format_clock(61), "01:01");
        assert_eq!(format_clock(3599), "59:59");
        assert_eq!(format_clock(6000), "100:00");
    }

    #[test]
    fn completion_message_reports_time_and_moves() {
        assert_eq!(
            completion_message(83, 12),
            "Congratulations! You completed the game in 01:23 with 12 moves."
        );
    }
}
