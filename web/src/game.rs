use clap::Args;
use connect4_core as game;
use yew::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq)]
enum ViewCellState {
    Empty,
    Piece { player: game::Player, winning: bool },
}

impl ViewCellState {
    fn classes(self) -> Classes {
        use game::Player::*;
        match self {
            Self::Empty => classes!("cell"),
            Self::Piece { player, winning } => classes!(
                "cell",
                match player {
                    PlayerOne => "red",
                    PlayerTwo => "yellow",
                },
                winning.then_some("win")
            ),
        }
    }
}

/// Something worth telling the players about after a drop.
#[derive(Copy, Clone, Debug, PartialEq)]
enum Announcement {
    Winner(game::Player),
    Tie,
}

impl Announcement {
    fn message(self) -> String {
        match self {
            Self::Winner(player) => format!("{player} wins the game!"),
            Self::Tie => "It's a tie!".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct GameSession {
    engine: game::GameEngine,
}

impl GameSession {
    fn new() -> Self {
        Self {
            engine: game::GameEngine::new(),
        }
    }

    fn cell_state_at(&self, coords: game::Coord2) -> ViewCellState {
        match self.engine.cell_at(coords).owner() {
            None => ViewCellState::Empty,
            Some(player) => ViewCellState::Piece {
                player,
                winning: self
                    .engine
                    .winning_line()
                    .is_some_and(|line| line.contains(&coords)),
            },
        }
    }

    fn is_column_open(&self, column: game::Coord) -> bool {
        self.engine.valid_columns().any(|open| open == column)
    }

    fn status_line(&self) -> String {
        use game::GameStatus::*;
        match self.engine.status() {
            InProgress => format!("{}'s turn", self.engine.current_player()),
            Won(player) => Announcement::Winner(player).message(),
            Stalemate => Announcement::Tie.message(),
        }
    }

    fn drop_in_column(&mut self, column: game::Coord) -> game::Result<Option<Announcement>> {
        let outcome = self.engine.drop_piece(column.into())?;
        log::debug!("drop into column {}: {:?}", column, outcome);

        Ok(match outcome {
            game::DropOutcome::Win { player, .. } => Some(Announcement::Winner(player)),
            game::DropOutcome::Continue(_) if self.engine.is_board_full() => {
                Some(Announcement::Tie)
            }
            game::DropOutcome::Continue(_) => None,
        })
    }

    fn reset(&mut self) {
        self.engine.reset();
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    DropInColumn(game::Coord),
    Reset,
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    row: game::Coord,
    column: game::Coord,
    cell_state: ViewCellState,
    #[prop_or_default]
    locked: bool,
    callback: Callback<game::Coord>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        row,
        column,
        cell_state,
        locked,
        callback,
    } = props.clone();

    let mut class = cell_state.classes();
    if locked {
        class.push("locked");
    }

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("({}, {}) clicked", row, column);
        callback.emit(column);
    });

    html! {
        <td {class} {onclick} data-row={row.to_string()} data-col={column.to_string()}/>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Announce results only in the status line, never with a browser alert
    #[arg(long)]
    #[prop_or_default]
    pub(crate) no_alert: bool,
}

#[derive(Debug)]
pub(crate) struct GameView {
    game: GameSession,
}

impl GameView {
    fn announce(&self, ctx: &Context<Self>, announcement: Announcement) {
        let message = announcement.message();
        log::info!("{}", message);
        if !ctx.props().no_alert {
            gloo::dialogs::alert(&message);
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            game: GameSession::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            DropInColumn(column) => match self.game.drop_in_column(column) {
                Ok(announcement) => {
                    if let Some(announcement) = announcement {
                        self.announce(ctx, announcement);
                    }
                    true
                }
                Err(err) => {
                    log::debug!("drop into column {} rejected: {}", column, err);
                    false
                }
            },
            Reset => {
                log::debug!("reset");
                self.game.reset();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let (rows, columns) = game::SIZE;
        let status = self.game.status_line();
        let finished = self.game.engine.status().is_finished();

        let cb_reset = ctx.link().callback(|_: MouseEvent| Msg::Reset);

        html! {
            <div class="connect4">
                <nav>
                    <output class={classes!(finished.then_some("finished"))}>{status}</output>
                    <button id="reset-btn" onclick={cb_reset}>{"Reset"}</button>
                </nav>
                <table id="connect4-board">
                    {
                        for (0..rows).map(|row| html! {
                            <tr>
                                {
                                    for (0..columns).map(|column| {
                                        let cell_state = self.game.cell_state_at((row, column));
                                        let locked = !self.game.is_column_open(column);
                                        let callback = ctx.link().callback(Msg::DropInColumn);
                                        html! {
                                            <CellView {row} {column} {cell_state} {locked} {callback}/>
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </table>
            </div>
        }
    }
}
