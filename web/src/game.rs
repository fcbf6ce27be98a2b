use crate::audio::{AudioCues, Cue};
use crate::panels::{CompletionBanner, Header, Stats};
use crate::utils::*;
use concentration_core as game;
use game::{BoardSize, CardId, PendingFlip, SelectOutcome, SoundPreference};
use gloo::timers::callback::{Interval, Timeout};
use serde::{Deserialize, Serialize};
use yew::prelude::*;

/// Glyph shown on the back of every card
const FACE_DOWN: &str = "?";

fn card_glyph(card: &game::Card) -> &'static str {
    if card.is_face_up() {
        card.value.glyph()
    } else {
        FACE_DOWN
    }
}

/// Every accepted selection or flip-back changes the board, rejections change nothing
pub trait HasUpdate {
    fn has_update(self) -> bool;
}

impl<T, E> HasUpdate for Result<T, E> {
    fn has_update(self) -> bool {
        self.is_ok()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) enum Msg {
    Select(CardId),
    Resolve(PendingFlip),
    Tick,
    Restart,
    ChangeBoardSize(BoardSize),
    ToggleSound,
}

#[derive(Properties, Clone, PartialEq)]
struct CardProps {
    card: game::Card,
    callback: Callback<CardId>,
}

#[function_component(CardView)]
fn card_component(props: &CardProps) -> Html {
    let CardProps { card, callback } = props.clone();
    let class = classes!(
        "card",
        card.is_flipped.then_some("flipped"),
        card.is_matched.then_some("matched"),
    );
    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("card {} clicked", card.id);
        callback.emit(card.id)
    });

    html! {
        <button {class} {onclick}>{card_glyph(&card)}</button>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct GameProps {
    #[prop_or_default]
    pub seed: Option<u64>,
    #[prop_or_default]
    pub board_size: BoardSize,
}

pub(crate) struct GameView {
    game: game::Game,
    sound: SoundPreference,
    store: LocalStore,
    audio: AudioCues,
    ticker: Option<Interval>,
    pending_flip: Option<Timeout>,
}

impl GameView {
    fn new_game(&mut self, board_size: BoardSize) {
        // dropping the timers cancels them
        self.ticker = None;
        self.pending_flip = None;
        self.game.restart(board_size, js_random_seed());
        log::info!("New {} game", board_size);
    }

    fn play(&self, cue: Cue) {
        if self.sound.is_enabled() {
            self.audio.play(cue);
        }
    }

    fn select_card(&mut self, ctx: &Context<Self>, card_id: CardId) -> bool {
        let result = self.game.select(card_id);
        match result {
            Ok(outcome) => {
                log::debug!("select {}: {:?}", card_id, outcome);
                self.play(Cue::Click);
                match outcome {
                    SelectOutcome::FirstPick => {}
                    SelectOutcome::Matched => self.play(Cue::Match),
                    SelectOutcome::Completed => {
                        self.play(Cue::Match);
                        log::info!(
                            "Completed in {} moves and {} seconds",
                            self.game.move_count(),
                            self.game.elapsed_secs()
                        );
                    }
                    SelectOutcome::Mismatched(pending) => {
                        self.pending_flip = Some(Self::create_flip_back(ctx, pending));
                    }
                }
            }
            Err(err) => log::debug!("select {} ignored: {}", card_id, err),
        }
        result.has_update()
    }

    /// Keeps the clock interval alive exactly while the game is running
    fn sync_ticker(&mut self, ctx: &Context<Self>) {
        match (self.game.is_running(), self.ticker.is_some()) {
            (true, false) => self.ticker = Some(Self::create_ticker(ctx)),
            (false, true) => self.ticker = None,
            _ => {}
        }
    }

    fn create_ticker(ctx: &Context<Self>) -> Interval {
        let link = ctx.link().clone();
        Interval::new(game::TICK_INTERVAL_MS, move || link.send_message(Msg::Tick))
    }

    fn create_flip_back(ctx: &Context<Self>, pending: PendingFlip) -> Timeout {
        let link = ctx.link().clone();
        Timeout::new(game::MISMATCH_DELAY_MS, move || {
            link.send_message(Msg::Resolve(pending))
        })
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let GameProps { seed, board_size } = ctx.props().clone();
        let store = LocalStore;
        Self {
            game: game::Game::new(board_size, seed.unwrap_or_else(js_random_seed)),
            sound: SoundPreference::load(&store),
            store,
            audio: AudioCues::new(),
            ticker: None,
            pending_flip: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        let updated = match msg {
            Select(card_id) => self.select_card(ctx, card_id),
            Resolve(pending) => {
                self.pending_flip = None;
                let result = self.game.resolve(pending);
                if let Err(err) = &result {
                    log::debug!("flip back ignored: {}", err);
                }
                result.has_update()
            }
            Tick => self.game.tick(),
            Restart => {
                self.new_game(self.game.board_size());
                true
            }
            ChangeBoardSize(board_size) if board_size == self.game.board_size() => false,
            ChangeBoardSize(board_size) => {
                self.new_game(board_size);
                true
            }
            ToggleSound => {
                let enabled = self.sound.toggle(&mut self.store);
                log::debug!("sound enabled: {}", enabled);
                true
            }
        };

        self.sync_ticker(ctx);
        updated
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let board_size = self.game.board_size();
        let grid_class = classes!("grid", format!("cols-{}", board_size.columns()));
        let on_toggle_sound = ctx.link().callback(|()| ToggleSound);
        let on_restart = ctx.link().callback(|()| Restart);
        let on_board_size = ctx.link().callback(ChangeBoardSize);
        let callback = ctx.link().callback(Select);

        html! {
            <div class="concentration">
                <Header sound_enabled={self.sound.is_enabled()} {on_toggle_sound} {on_restart}/>
                <Stats
                    elapsed_secs={self.game.elapsed_secs()}
                    moves={self.game.move_count()}
                    {board_size}
                    {on_board_size}
                />
                <div class={grid_class}>
                    {
                        for self.game.cards().iter().map(|&card| html! {
                            <CardView key={card.id.0} {card} callback={callback.clone()}/>
                        })
                    }
                </div>
                if self.game.is_complete() {
                    <CompletionBanner
                        elapsed_secs={self.game.elapsed_secs()}
                        moves={self.game.move_count()}
                    />
                }
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_down_cards_hide_their_symbol() {
        let mut card = game::Card::new(CardId(0), game::Symbol(0));
        assert_eq!(card_glyph(&card), FACE_DOWN);

        card.is_flipped = true;
        assert_eq!(card_glyph(&card), "🐶");

        card.is_flipped = false;
        card.is_matched = true;
        assert_eq!(card_glyph(&card), "🐶");
    }

    #[test]
    fn rejected_select_is_not_an_update() {
        let mut session = game::Game::with_generator(BoardSize::Small, game::OrderedDeckGenerator);

        assert!(session.select(CardId(0)).has_update());
        assert!(!session.select(CardId(0)).has_update());
        assert!(!session.select(CardId(99)).has_update());
    }

    #[test]
    fn every_accepted_select_is_an_update() {
        let mut session = game::Game::with_generator(BoardSize::Small, game::OrderedDeckGenerator);

        let first = session.select(CardId(0));
        assert_eq!(first, Ok(SelectOutcome::FirstPick));
        assert!(first.has_update());

        let matched = session.select(CardId(8));
        assert_eq!(matched, Ok(SelectOutcome::Matched));
        assert!(matched.has_update());

        session.select(CardId(1)).unwrap();
        let mismatched = session.select(CardId(2));
        let Ok(SelectOutcome::Mismatched(pending)) = mismatched else {
            panic!("expected a mismatch");
        };
        assert!(mismatched.has_update());
        assert!(session.resolve(pending).has_update());
    }

    #[test]
    fn stale_flip_back_is_not_an_update() {
        let mut session = game::Game::with_generator(BoardSize::Small, game::OrderedDeckGenerator);
        session.select(CardId(0)).unwrap();
        let Ok(SelectOutcome::Mismatched(pending)) = session.select(CardId(1)) else {
            panic!("expected a mismatch");
        };

        session.restart_with_generator(BoardSize::Small, game::OrderedDeckGenerator);

        assert!(!session.resolve(pending).has_update());
    }
}
