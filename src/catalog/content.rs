//! Authored speech and card content.

use super::{Branch, CaActivity, CardContent, NavigationNode, NhPlace, TravelState};

const ROOT_QUESTION: &str = "Would you rather explore New Hampshire or California?";

pub const DESTINATION_CARD_TITLE: &str = "Adventure Time!";

pub const FAREWELL: &str = "Good bye. ";

pub static WELCOME: NavigationNode = NavigationNode {
    speech: "Hello, welcome to Where-to Winnebago! Let’s get you started on your next adventure. \
             You can respond back to return to the previous question or start over to start a \
             new adventure. First let’s pick a state. Would you rather explore New Hampshire or \
             California?",
    reprompt: Some(ROOT_QUESTION),
    card: None,
};

pub static ROOT: NavigationNode = NavigationNode {
    speech: "Let’s get you started on your next adventure. First let’s pick a state. \
             Would you rather explore New Hampshire or California?",
    reprompt: Some(ROOT_QUESTION),
    card: None,
};

pub static STATE_CLARIFICATION: NavigationNode = NavigationNode {
    speech: "Please choose from either California or New Hampshire for this prototype.",
    reprompt: Some(ROOT_QUESTION),
    card: Some(CardContent {
        title: DESTINATION_CARD_TITLE,
        body: "Let's go to {destination}!",
        image_url: None,
    }),
};

static NEW_HAMPSHIRE: NavigationNode = NavigationNode {
    speech: "Great, we think the granite state is pretty cool too. \
             Would you like to hike a mountain or visit the seacoast?",
    reprompt: Some("Would you like to hike a mountain or visit the seacoast?"),
    card: Some(CardContent {
        title: DESTINATION_CARD_TITLE,
        body: "Let's go to {destination}!",
        image_url: Some(
            "https://www.rocketbanner.com/images/states/new-hampshire/new-hampshire-vinyl-banners.jpg",
        ),
    }),
};

static CALIFORNIA: NavigationNode = NavigationNode {
    speech: "Okay, are you interested in family friendly activities or adults only?",
    reprompt: Some("Are you interested in family friendly activities or adults only?"),
    card: Some(CardContent {
        title: DESTINATION_CARD_TITLE,
        body: "Let's go to {destination}!",
        image_url: Some("https://cdn.history.com/sites/2/2015/09/GettyImages-501880463.jpg"),
    }),
};

const TWIN_MOUNTAIN_KOA: CardContent = CardContent {
    title: "Twin Mountain KOA campground",
    body: "Amenities:\n\u{2022}50 AMP Max\n\u{2022}90’ Max Length\n\u{2022}Wi-Fi\n\u{2022}Cable TV\n\
           \u{2022}Pool\n\u{2022}Dog Park\n\u{2022}Game Room\n\u{2022}General Store\n\
           http://koa.com/campgrounds/twin-mountain/\n372 NH-115\nCarroll, NH 03598\n(603) 846-5559",
    image_url: None,
};

const WAKEDA: CardContent = CardContent {
    title: "Wakeda Campground",
    body: "http://www.wakedacampground.com/ \n 294 Exeter Rd, Hampton Falls, NH 03844 \n (603) 772-5274",
    image_url: None,
};

const ANAHEIM_RV_PARK: CardContent = CardContent {
    title: "Disneyland",
    body: "www.anaheimrvpark.com\n200 W Midway Dr\nAnaheim, CA 92805\n(714) 774-3860",
    image_url: None,
};

const AMERICAN_RIVER_RESORT: CardContent = CardContent {
    title: "American River Resort",
    body: "http://www.americanriverresort.com/\n6019 New River Road\nColoma, CA 95613\n(530) 622-6700",
    image_url: None,
};

static HIKE: NavigationNode = NavigationNode {
    speech: "Great, we’d suggest Mount Washington, the tallest peak east of the Mississippi. \
             This mountain has an elevation of 6,289 feet and is home to some of the world’s \
             wildest weather. You can stay at the nearby Twin Mountain KOA campground. An \
             adventure card has been sent with an address, phone number, and additional \
             information.",
    reprompt: Some("Say stay, mountain, or phone to hear more about your hike."),
    card: Some(TWIN_MOUNTAIN_KOA),
};

static SEACOAST: NavigationNode = NavigationNode {
    speech: "Great, we recommend the Wakeda Campground located in Hampton Falls. It’s close to \
             the beaches and a short drive from our home, the bustling seaside town of \
             Portsmouth, NH.  An adventure card has been sent with the address, phone number, \
             and additional information.",
    reprompt: Some("Say stay, town, or phone to hear more about the seacoast."),
    card: Some(WAKEDA),
};

static FAMILY: NavigationNode = NavigationNode {
    speech: "Everyone loves Disneyland, right? The closest place to park your RV near \
             Disneyland is less than two miles away at the Anaheim RV Park. An adventure card \
             has been sent with an address, phone number, and additional information.",
    reprompt: Some("Say stay, park, or phone to hear more about your family trip."),
    card: Some(ANAHEIM_RV_PARK),
};

static ADULT: NavigationNode = NavigationNode {
    speech: "Rad! Are you looking for a thrill, or would you rather unwind?",
    reprompt: Some("Say thrill, unwind, or phone to hear more about your getaway."),
    card: None,
};

pub(super) fn state_node(state: TravelState) -> &'static NavigationNode {
    match state {
        TravelState::NewHampshire => &NEW_HAMPSHIRE,
        TravelState::California => &CALIFORNIA,
    }
}

pub(super) fn branch_node(branch: Branch) -> &'static NavigationNode {
    match branch {
        Branch::Place(NhPlace::Hike) => &HIKE,
        Branch::Place(NhPlace::Seacoast) => &SEACOAST,
        Branch::Activity(CaActivity::Family) => &FAMILY,
        Branch::Activity(CaActivity::Adult) => &ADULT,
    }
}

pub(super) static STATE_ALIASES: &[(&str, TravelState)] = &[
    ("new hampshire", TravelState::NewHampshire),
    ("california", TravelState::California),
];

pub(super) static BRANCH_ALIASES: &[(&str, Branch)] = &[
    ("hike", Branch::Place(NhPlace::Hike)),
    ("hike a mountain", Branch::Place(NhPlace::Hike)),
    ("seacoast", Branch::Place(NhPlace::Seacoast)),
    ("visit the seacoast", Branch::Place(NhPlace::Seacoast)),
    ("family", Branch::Activity(CaActivity::Family)),
    ("family friendly", Branch::Activity(CaActivity::Family)),
    ("adults", Branch::Activity(CaActivity::Adult)),
    ("adults only", Branch::Activity(CaActivity::Adult)),
];

/// A detail action under a branch. `node: None` marks content that has a
/// place in the tree but has not been written yet.
pub(super) struct DetailRecord {
    pub branch: Branch,
    pub action: &'static str,
    pub node: Option<NavigationNode>,
}

const fn speak(speech: &'static str) -> Option<NavigationNode> {
    Some(NavigationNode {
        speech,
        reprompt: None,
        card: None,
    })
}

const fn speak_with_card(speech: &'static str, card: CardContent) -> Option<NavigationNode> {
    Some(NavigationNode {
        speech,
        reprompt: None,
        card: Some(card),
    })
}

pub(super) static DETAILS: &[DetailRecord] = &[
    DetailRecord {
        branch: Branch::Place(NhPlace::Hike),
        action: "stay",
        node: speak_with_card(
            "You can stay at the nearby Twin Mountain KOA campground, at 372 NH-115 in Carroll. \
             It has a pool, a dog park, a game room, and a general store. An adventure card has \
             been sent with the amenities, address, and phone number.",
            TWIN_MOUNTAIN_KOA,
        ),
    },
    DetailRecord {
        branch: Branch::Place(NhPlace::Hike),
        action: "mountain",
        node: speak(
            "Mount Washington is the tallest peak east of the Mississippi. It has an elevation \
             of 6,289 feet and is home to some of the world’s wildest weather.",
        ),
    },
    DetailRecord {
        branch: Branch::Place(NhPlace::Hike),
        action: "phone",
        node: speak("You can reach the Twin Mountain KOA campground at (603) 846-5559."),
    },
    DetailRecord {
        branch: Branch::Place(NhPlace::Seacoast),
        action: "stay",
        node: speak_with_card(
            "Wakeda Campground is at 294 Exeter Road in Hampton Falls, close to the beaches. \
             An adventure card has been sent with the address and phone number.",
            WAKEDA,
        ),
    },
    DetailRecord {
        branch: Branch::Place(NhPlace::Seacoast),
        action: "town",
        node: speak(
            "Portsmouth, NH is our home, a bustling seaside town a short drive from Wakeda \
             Campground.",
        ),
    },
    DetailRecord {
        branch: Branch::Place(NhPlace::Seacoast),
        action: "phone",
        node: speak("You can reach Wakeda Campground at (603) 772-5274."),
    },
    DetailRecord {
        branch: Branch::Activity(CaActivity::Family),
        action: "stay",
        node: speak_with_card(
            "The Anaheim RV Park is at 200 West Midway Drive in Anaheim, less than two miles \
             from Disneyland. An adventure card has been sent with the address and phone number.",
            ANAHEIM_RV_PARK,
        ),
    },
    DetailRecord {
        branch: Branch::Activity(CaActivity::Family),
        action: "park",
        node: None,
    },
    DetailRecord {
        branch: Branch::Activity(CaActivity::Family),
        action: "phone",
        node: speak("You can reach the Anaheim RV Park at (714) 774-3860."),
    },
    DetailRecord {
        branch: Branch::Activity(CaActivity::Adult),
        action: "thrill",
        node: speak_with_card(
            "Drive your Winnebago over to the American River Resort. This resort also offers \
             white water rafting excursions as one of their amenities. An adventure card has \
             been sent to you with an address, phone number and additional information.",
            AMERICAN_RIVER_RESORT,
        ),
    },
    DetailRecord {
        branch: Branch::Activity(CaActivity::Adult),
        action: "unwind",
        node: None,
    },
    DetailRecord {
        branch: Branch::Activity(CaActivity::Adult),
        action: "phone",
        node: speak("You can reach the American River Resort at (530) 622-6700."),
    },
];
