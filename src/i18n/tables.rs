// Per-language message tables. English is total; the other tables return
// None for entries that have not been translated yet, which resolves to the
// English text at lookup time.

use super::Phrase;

pub(super) fn english(phrase: Phrase) -> &'static str {
    match phrase {
        Phrase::PassDeviceTo => "Pass the device to",
        Phrase::AreYouReady => "Are you ready?",
        Phrase::ItsMyTurn => "It's my turn",
        Phrase::YourTurnX => "Your turn, {name}",
        Phrase::TapToReveal => "Tap to reveal",
        Phrase::YourRoleIsHidden => "Your role is hidden",
        Phrase::YouAreImpostor => "You are the impostor!",
        Phrase::BlendIn => "Blend in. Don't get caught.",
        Phrase::TheWordIs => "The word is",
        Phrase::YouAreNotImpostor => "You are not the impostor.",
        Phrase::Continue => "Continue",
        Phrase::DiscussionTime => "Discussion time!",
        Phrase::FindTheImpostor => "Talk it out and find the impostor.",
        Phrase::RevealImpostors => "Reveal impostors",
        Phrase::GameOver => "Round over!",
        Phrase::TheWordWas => "The word was",
        Phrase::TheImpostorWas => "The impostor was",
        Phrase::TheImpostorsWere => "The impostors were",
        Phrase::NewRound => "New round",
        Phrase::NewGame => "New game",
        Phrase::Back => "Back",
        Phrase::Topic => "Topic",
        Phrase::Round => "Round",
        Phrase::PlayerX => "Player {number}",
        Phrase::EmptyWordListAlert => "Your word list is empty. Add some words first!",
        Phrase::StartGame => "Start game",
        Phrase::HomeDescription => "The party game of hidden words and bold bluffs.",
        Phrase::PlayerSetup => "Player setup",
        Phrase::NumPlayers => "Number of players",
        Phrase::ImpostorSettings => "Impostor settings",
        Phrase::NumImpostors => "Number of impostors",
        Phrase::OneImpostor => "One impostor",
        Phrase::OneOrTwoImpostors => "One or two impostors",
        Phrase::TwoImpostorsProbability => "Probability of two impostors",
        Phrase::WordList => "Word list",
        Phrase::Predefined => "Predefined",
        Phrase::Custom => "Custom",
        Phrase::SelectTopic => "Select a topic",
        Phrase::CustomListCount => "Your custom list has {count} words.",
        Phrase::CustomListEmpty => "Your custom list is empty.",
        Phrase::ManageCustomWords => "Manage custom words",
        Phrase::AddRemoveWords => "Add or remove the words used in your games.",
        Phrase::EnterNewWord => "Enter a new word",
        Phrase::AddWord => "Add word",
        Phrase::Delete => "Delete",
        Phrase::BackToSetup => "Back to setup",
    }
}

pub(super) fn spanish(phrase: Phrase) -> Option<&'static str> {
    Some(match phrase {
        Phrase::PassDeviceTo => "Pasa el dispositivo a",
        Phrase::AreYouReady => "¿Estás listo?",
        Phrase::ItsMyTurn => "Es mi turno",
        Phrase::YourTurnX => "Tu turno, {name}",
        Phrase::TapToReveal => "Toca para revelar",
        Phrase::YourRoleIsHidden => "Tu rol está oculto",
        Phrase::YouAreImpostor => "¡Eres el impostor!",
        Phrase::BlendIn => "Pasa desapercibido. Que no te pillen.",
        Phrase::TheWordIs => "La palabra es",
        Phrase::YouAreNotImpostor => "No eres el impostor.",
        Phrase::Continue => "Continuar",
        Phrase::DiscussionTime => "¡Hora de debatir!",
        Phrase::FindTheImpostor => "Hablad y encontrad al impostor.",
        Phrase::RevealImpostors => "Revelar impostores",
        Phrase::GameOver => "¡Fin de la ronda!",
        Phrase::TheWordWas => "La palabra era",
        Phrase::TheImpostorWas => "El impostor era",
        Phrase::TheImpostorsWere => "Los impostores eran",
        Phrase::NewRound => "Nueva ronda",
        Phrase::NewGame => "Nueva partida",
        Phrase::Back => "Atrás",
        Phrase::Topic => "Tema",
        Phrase::Round => "Ronda",
        Phrase::PlayerX => "Jugador {number}",
        Phrase::EmptyWordListAlert => "Tu lista de palabras está vacía. ¡Añade palabras primero!",
        Phrase::StartGame => "Empezar partida",
        Phrase::HomeDescription => "El juego de palabras ocultas y faroles atrevidos.",
        Phrase::PlayerSetup => "Configuración de jugadores",
        Phrase::NumPlayers => "Número de jugadores",
        Phrase::ImpostorSettings => "Configuración de impostores",
        Phrase::NumImpostors => "Número de impostores",
        Phrase::OneImpostor => "Un impostor",
        Phrase::OneOrTwoImpostors => "Uno o dos impostores",
        Phrase::TwoImpostorsProbability => "Probabilidad de dos impostores",
        Phrase::WordList => "Lista de palabras",
        Phrase::Predefined => "Predefinida",
        Phrase::Custom => "Personalizada",
        Phrase::SelectTopic => "Elige un tema",
        Phrase::CustomListCount => "Tu lista personalizada tiene {count} palabras.",
        Phrase::CustomListEmpty => "Tu lista personalizada está vacía.",
        Phrase::ManageCustomWords => "Gestionar palabras personalizadas",
        Phrase::AddRemoveWords => "Añade o elimina las palabras de tus partidas.",
        Phrase::EnterNewWord => "Escribe una palabra nueva",
        Phrase::AddWord => "Añadir palabra",
        Phrase::Delete => "Eliminar",
        Phrase::BackToSetup => "Volver a la configuración",
    })
}

pub(super) fn french(phrase: Phrase) -> Option<&'static str> {
    Some(match phrase {
        Phrase::PassDeviceTo => "Passe l'appareil à",
        Phrase::AreYouReady => "Tu es prêt ?",
        Phrase::ItsMyTurn => "C'est mon tour",
        Phrase::YourTurnX => "À toi, {name}",
        Phrase::TapToReveal => "Touche pour révéler",
        Phrase::YourRoleIsHidden => "Ton rôle est caché",
        Phrase::YouAreImpostor => "Tu es l'imposteur !",
        Phrase::BlendIn => "Fais-toi discret. Ne te fais pas prendre.",
        Phrase::TheWordIs => "Le mot est",
        Phrase::YouAreNotImpostor => "Tu n'es pas l'imposteur.",
        Phrase::Continue => "Continuer",
        Phrase::DiscussionTime => "Place au débat !",
        Phrase::FindTheImpostor => "Discutez et trouvez l'imposteur.",
        Phrase::RevealImpostors => "Révéler les imposteurs",
        Phrase::GameOver => "Fin de la manche !",
        Phrase::TheWordWas => "Le mot était",
        Phrase::TheImpostorWas => "L'imposteur était",
        Phrase::TheImpostorsWere => "Les imposteurs étaient",
        Phrase::NewRound => "Nouvelle manche",
        Phrase::NewGame => "Nouvelle partie",
        Phrase::Back => "Retour",
        Phrase::Topic => "Thème",
        Phrase::Round => "Manche",
        Phrase::PlayerX => "Joueur {number}",
        Phrase::EmptyWordListAlert => "Ta liste de mots est vide. Ajoute d'abord des mots !",
        Phrase::StartGame => "Lancer la partie",
        Phrase::HomeDescription => "Le jeu de mots cachés et de bluff audacieux.",
        Phrase::PlayerSetup => "Configuration des joueurs",
        Phrase::NumPlayers => "Nombre de joueurs",
        Phrase::ImpostorSettings => "Configuration des imposteurs",
        Phrase::NumImpostors => "Nombre d'imposteurs",
        Phrase::OneImpostor => "Un imposteur",
        Phrase::OneOrTwoImpostors => "Un ou deux imposteurs",
        Phrase::TwoImpostorsProbability => "Probabilité de deux imposteurs",
        Phrase::WordList => "Liste de mots",
        Phrase::Predefined => "Prédéfinie",
        Phrase::Custom => "Personnalisée",
        Phrase::SelectTopic => "Choisis un thème",
        Phrase::CustomListCount => "Ta liste personnalisée contient {count} mots.",
        Phrase::CustomListEmpty => "Ta liste personnalisée est vide.",
        Phrase::ManageCustomWords => "Gérer les mots personnalisés",
        Phrase::AddRemoveWords => "Ajoute ou supprime les mots de tes parties.",
        Phrase::EnterNewWord => "Saisis un nouveau mot",
        Phrase::AddWord | Phrase::Delete => return None,
        Phrase::BackToSetup => "Retour à la configuration",
    })
}

pub(super) fn italian(phrase: Phrase) -> Option<&'static str> {
    Some(match phrase {
        Phrase::PassDeviceTo => "Passa il dispositivo a",
        Phrase::AreYouReady => "Sei pronto?",
        Phrase::ItsMyTurn => "È il mio turno",
        Phrase::YourTurnX => "Tocca a te, {name}",
        Phrase::TapToReveal => "Tocca per rivelare",
        Phrase::YourRoleIsHidden => "Il tuo ruolo è nascosto",
        Phrase::YouAreImpostor => "Sei l'impostore!",
        Phrase::BlendIn => "Mimetizzati. Non farti scoprire.",
        Phrase::TheWordIs => "La parola è",
        Phrase::YouAreNotImpostor => "Non sei l'impostore.",
        Phrase::Continue => "Continua",
        Phrase::DiscussionTime => "È ora di discutere!",
        Phrase::FindTheImpostor => "Parlatene e trovate l'impostore.",
        Phrase::RevealImpostors => "Rivela gli impostori",
        Phrase::GameOver => "Fine del round!",
        Phrase::TheWordWas => "La parola era",
        Phrase::TheImpostorWas => "L'impostore era",
        Phrase::TheImpostorsWere => "Gli impostori erano",
        Phrase::NewRound => "Nuovo round",
        Phrase::NewGame => "Nuova partita",
        Phrase::Back => "Indietro",
        Phrase::Topic => "Tema",
        Phrase::Round => "Round",
        Phrase::PlayerX => "Giocatore {number}",
        Phrase::EmptyWordListAlert => "La tua lista di parole è vuota. Aggiungi prima qualche parola!",
        Phrase::StartGame => "Inizia la partita",
        Phrase::HomeDescription => "Il gioco delle parole nascoste e dei bluff audaci.",
        Phrase::PlayerSetup => "Impostazione giocatori",
        Phrase::NumPlayers => "Numero di giocatori",
        Phrase::ImpostorSettings => "Impostazioni impostori",
        Phrase::NumImpostors => "Numero di impostori",
        Phrase::OneImpostor => "Un impostore",
        Phrase::OneOrTwoImpostors => "Uno o due impostori",
        Phrase::TwoImpostorsProbability => "Probabilità di due impostori",
        Phrase::WordList => "Lista di parole",
        Phrase::Predefined => "Predefinita",
        Phrase::Custom => "Personalizzata",
        Phrase::SelectTopic => "Scegli un tema",
        Phrase::CustomListCount => "La tua lista personalizzata ha {count} parole.",
        Phrase::CustomListEmpty => "La tua lista personalizzata è vuota.",
        Phrase::ManageCustomWords => "Gestisci parole personalizzate",
        Phrase::AddRemoveWords => "Aggiungi o rimuovi le parole delle tue partite.",
        Phrase::EnterNewWord => "Inserisci una nuova parola",
        Phrase::AddWord | Phrase::Delete => return None,
        Phrase::BackToSetup => "Torna alle impostazioni",
    })
}
