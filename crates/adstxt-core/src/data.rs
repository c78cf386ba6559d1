//! Literal registry data: known ad systems and observed domain spellings.
//!
//! Transcribed from the IAB Tech Lab ads.txt normalization mappings
//! (<https://wiki.iabtechlab.com/index.php?title=Ads.txt_Normalization_Mappings>).
//! Ids were assigned by auto-increment at data-entry time and carry no
//! meaning; gaps exist where entries were retired. Spellings are kept
//! exactly as observed in publisher files, misspellings and decorated
//! forms included.

/// Known ad systems: `(id, name, canonical-domain declaration)`.
///
/// The declaration is the comma-separated string the exchange published;
/// empty means no canonical form has been declared.
pub(crate) const AD_SYSTEMS: &[(u32, &str, &str)] = &[
    (1, "Rubicon Project", "rubiconproject.com"),
    (2, "33Across", ""),
    (3, "PubMatic", "pubmatic.com"),
    (4, "OpenX", "openx.com"),
    (5, "Facebook", ""),
    (6, "GumGum", ""),
    (7, "Kargo", ""),
    (8, "Google", "google.com"),
    (9, "bRealtime", ""),
    (10, "Amazon", ""),
    (11, "One by AOL: Display", "adtech.com, aolcloud.net"),
    (12, "LiveIntent", ""),
    (13, "Yieldmo", ""),
    (14, "MoPub", ""),
    (15, "One by AOL: Mobile", "aol.com"),
    (16, "SmartStream", ""),
    (17, "Smaato", ""),
    (18, "Taboola", ""),
    (19, "TrustX", ""),
    (20, "LKQD", ""),
    (21, "Criteo", ""),
    (22, "Exponential", ""),
    (23, "Sovrn", ""),
    (24, "RhythmOne", ""),
    (25, "Yieldbot", ""),
    (26, "Technorati", ""),
    (27, "Bidfluence", ""),
    (28, "Switch Concepts", ""),
    (29, "BrightRoll from Yahoo!", "btrll.com"),
    (30, "Conversant", ""),
    (31, "Sonobi", ""),
    (32, "Spoutable", ""),
    (33, "FreeWheel", "freewheel.tv"),
    (34, "Connatix", ""),
    (35, "Centro Brand Exchange", ""),
    (36, "Positive Mobile", ""),
    (37, "MemeGlobal", ""),
    (38, "Kixer", ""),
    (39, "Sekindo", ""),
    (40, "Improve Digital", "improvedigital.com"),
    (41, "AdForm", ""),
    (42, "MADS", ""),
    (43, "Inneractive", "inner-active.com"),
    (44, "SpotX", "spotx.tv,spotxchange.com"),
    (45, "StreamRail", ""),
    (46, "MediaMath", ""),
    (47, "AdYouLike", ""),
    (48, "Index Exchange", "indexexchange.com"),
    (49, "e-Planning", ""),
    (50, "Kiosked", ""),
    (51, "UnrulyX", ""),
    (52, "Brightcom", ""),
    (53, "PowerInbox", ""),
    (54, "Fyber", "fyber.com"),
    (55, "TidalTV", ""),
    (56, "Nativo", ""),
    (57, "Media.net", ""),
    (58, "YuMe", ""),
    (59, "RevContent", ""),
    (60, "Outbrain", ""),
    (61, "Zedo", "zedo.com"),
    (62, "SlimCut Media", ""),
    (63, "Bidtellect", ""),
    (64, "Smart RTB+", "smartadserver.com"),
    (65, "LoopMe", "loopme.com"),
    (66, "Vidazoo", ""),
    (67, "Videoflare", ""),
    (68, "Gemini from Yahoo!", "yahoo.com"),
    (69, "PixFuture", ""),
    (70, "OMS", ""),
    (71, "Ströer", ""),
    (73, "C1X", ""),
    (74, "Synacor", ""),
    (76, "Videology", ""),
    (77, "Telaria (fka Tremor Video)", "tremorhub.com"),
    (78, "Genesis Media", "altitude-arena.com"),
    (80, "Imonomy", ""),
    (81, "Komoona", ""),
    (82, "SpringServe", ""),
    (83, "TripleLift", ""),
    (84, "AppNexus", "appnexus.com"),
    (85, "NTV", ""),
    (86, "COMET", ""),
    (87, "Undertone", ""),
    (88, "One by AOL: Video", "advertising.com"),
    (89, "Algovid", ""),
    (90, "Lockerdome", ""),
    (91, "Widespace", ""),
    (92, "Sortable", ""),
    (93, "Mobfox", ""),
    (94, "Teads", "teads.tv"),
    (95, "PulsePoint", "contextweb.com"),
    (96, "District M", ""),
    (97, "Sharethrough", ""),
    (98, "Adfrontiers", ""),
    (99, "Ad3media", ""),
    (100, "ADMIZED", ""),
    (101, "Twiago", ""),
    (102, "Xapads", ""),
    (104, "Adstir", ""),
    (105, "Yieldlab", ""),
    (107, "Ad6Media", ""),
    (108, "Adbistro", ""),
    (109, "AdColony", ""),
    (110, "Fluct", ""),
    (111, "Adman Media", ""),
    (112, "AdMedia", ""),
    (113, "AdMixer", ""),
    (114, "NOT IN USE", ""),
    (115, "Ads4Pics", ""),
    (117, "Adunity", ""),
    (118, "AMM Media Marketing", ""),
    (119, "Advertise.com", ""),
    (120, "Aerserv", ""),
    (121, "AndBeyond.Media", ""),
    (122, "appTV", ""),
    (123, "ucfunnel", ""),
    (124, "WideOrbit", ""),
    (125, "Aximus", ""),
    (126, "BaronsMedia", ""),
    (128, "Streamlyn", ""),
    (129, "Bidtheater", ""),
    (131, "Buy Sell Ads", ""),
    (132, "Carambola", ""),
    (133, "Cedato", ""),
    (134, "Clickio", ""),
    (135, "Collective", ""),
    (136, "Adimia", ""),
    (137, "Converge-Digital", ""),
    (138, "Crimtan", ""),
    (139, "Defy", ""),
    (141, "DistroScale", ""),
    (142, "DynAdmic", ""),
    (144, "EADV", ""),
    (145, "Easy Platform", ""),
    (146, "eBoundServices", ""),
    (147, "Electric Sheep", ""),
    (148, "FirstImpression.io", ""),
    (149, "Exclude", ""),
    (150, "Get Intent", ""),
    (151, "Glu Company", ""),
    (152, "GMO SSP", ""),
    (153, "Browsi", ""),
    (154, "Gourmet Ads", ""),
    (155, "Hiro Media", ""),
    (156, "iBillboard", ""),
    (157, "Increase Rev", ""),
    (158, "Infolinks", ""),
    (159, "Insticator", ""),
    (160, "JustPremium", ""),
    (161, "JWPlayer", ""),
    (162, "KeenKale", ""),
    (163, "Lifestreet", ""),
    (164, "Linicom", ""),
    (165, "MadAdsMedia", ""),
    (166, "Vuble", "mediabong.com"),
    (167, "Deguate", ""),
    (169, "Mgid", ""),
    (170, "Monarch Ads", ""),
    (171, "Netseer", ""),
    (173, "Ooyala", ""),
    (174, "Optimatic", ""),
    (175, "Padsquad", ""),
    (176, "Paypal", ""),
    (177, "Playtouch", ""),
    (178, "Paywire", ""),
    (179, "PowerLinks", ""),
    (180, "NexTag", ""),
    (181, "Purch", ""),
    (182, "Q1 Media", ""),
    (183, "Quantcast", ""),
    (184, "Quantum Native", ""),
    (185, "ReklamStore", ""),
    (186, "RekMob", ""),
    (188, "Smartclip", ""),
    (189, "Smarty Ads", ""),
    (190, "Somo Audience", "somoaudience.com"),
    (191, "Spot.im", ""),
    (192, "Sprout", ""),
    (193, "SSPHwy", ""),
    (194, "StartApp", ""),
    (195, "SNT Media", ""),
    (196, "TabletMedia", ""),
    (197, "Tappx", ""),
    (198, "The Moneytizer", ""),
    (199, "The Trade Desk", ""),
    (200, "Thrive", ""),
    (201, "Tisoomi", ""),
    (202, "Tribal Fusion", ""),
    (203, "Trion Interactive", ""),
    (204, "TrueX", ""),
    (205, "Turf Digital", ""),
    (206, "UBM", ""),
    (207, "Underdog Media", ""),
    (208, "Alliance Data", ""),
    (209, "Verta Media", ""),
    (210, "Vertoz", ""),
    (211, "Video Intelligence", ""),
    (212, "Fidelity Media", ""),
    (213, "Yandex", ""),
    (214, "Yellow Hammer", ""),
    (215, "RockYou", "rockyou.net"),
    (216, "Innity", "innity.com"),
    (217, "Native Ads", "nativeads.com"),
    (218, "RichAudience", "richaudience.com"),
    (219, "AdStanding", "adstanding.com"),
    (220, "Mass2", "www.mass2.com"),
    (221, "RTK.io", ""),
    (222, "Atomx", "atomx.com"),
    (223, "Addroplet.com ", "Addroplet.com "),
    (224, "Liondigitalserving.com", "Liondigitalserving.com"),
    (225, "sulvo.com", "sulvo.com"),
    (226, "surgeprice.com", "surgeprice.com"),
    (227, "mediabong.com", "mediabong.com"),
    (228, "Seracast", "babaroll.com"),
    (229, "Juice Nectar", "juicenectar.com"),
    (230, "AdPone", "adpone.com"),
    (231, "OneTag", "onetag.com"),
    (232, "Between Exchange", "betweendigital.com"),
    (233, "Experian", "experian.com"),
    (234, "GammaSSP", "gammassp.com"),
    (235, "Cynogage", "cynogage.com"),
    (236, "DeepIntent", "deepintent.com"),
    (237, "Adversal", "adversal.com"),
    (238, "vmg.host", "vmg.host"),
    (239, "Vdopia", ""),
    (240, "Yengo", ""),
    (241, "Backbeatmedia", ""),
    (242, "Videmob by Cydersoft", ""),
    (243, "Ligatus", ""),
    (244, "Vidstart", ""),
];

/// Observed ads.txt field #1 spellings: `(spelling, ad system id)`.
///
/// Many-to-one onto [`AD_SYSTEMS`] ids. One entry is known to reference a
/// retired id (`"mobileadtrading.com"` -> 245); see `Registry::builtin`.
pub(crate) const DOMAIN_ALIASES: &[(&str, u32)] = &[
    ("rubicon.com", 1),
    ("fastlane.rubiconproject.com", 1),
    ("ads.rubiconproject.com", 1),
    ("rubiconproject.com", 1),
    ("rubiconproject.com<http://rubiconproject.com>", 1),
    ("33across.com", 2),
    ("pubmatic.com", 3),
    ("apps.pubmatic.com", 3),
    ("pubmatic", 3),
    ("openx.com", 4),
    ("openx", 4),
    ("openxebda", 4),
    ("openxprebid", 4),
    ("openx.com<http://openx.com>", 4),
    ("openx.net", 4),
    ("facebook.com", 5),
    ("facebook", 5),
    ("facebook:facebook.com", 5),
    ("gumgum.com", 6),
    ("kargo.com", 7),
    ("google.com", 8),
    ("googletagservices.com", 8),
    ("?google.com", 8),
    ("adsense", 8),
    ("google.com/adsense", 8),
    ("google.com<http://google.com>", 8),
    ("www.google.com/dfp", 8),
    ("brealtime.com", 9),
    ("Brealtime", 9),
    ("brealtimegoogle", 9),
    ("emxdgt.com105", 9),
    ("amazon-adsystem.com", 10),
    ("c.amazon-adsystem.com", 10),
    ("advertising.amazon.com", 10),
    ("amazon.com", 10),
    ("a9.com", 10),
    ("aps.amazon.com", 10),
    ("adtech.com", 11),
    ("adtech.net", 11),
    ("aolcloud.net", 11),
    ("liveintent.com", 12),
    ("yieldmo.com", 13),
    ("mopub.com", 14),
    ("aol.com", 15),
    ("smartstream.tv", 16),
    ("smaato.com", 17),
    ("spx.smaato.com", 17),
    ("taboola.com", 18),
    ("trustx.org", 19),
    ("sofia.trustx.org", 19),
    ("lkqd.net", 20),
    ("lkqd.com", 20),
    ("ad.lkqd.net", 20),
    ("criteo.com", 21),
    ("critero.com", 21),
    ("criteo.net", 21),
    ("phillymag.com==criteo.com", 21),
    ("exponential.com", 22),
    ("exponential.comi", 22),
    ("xponential.com", 22),
    ("lijit.com", 23),
    ("meridian.sovrn.com", 23),
    ("sovrn.com", 23),
    ("lijit", 23),
    ("rhythmone.com", 24),
    ("1rx.io", 24),
    ("yldbt.com", 25),
    ("technorati.com", 26),
    ("bidfluence.com", 27),
    ("beachfront.com", 27),
    ("switch.com", 28),
    ("switchconcept", 28),
    ("switchconcepts.com", 28),
    ("brightroll.com", 29),
    ("conversantmedia.com", 30),
    ("go.sonobi.com", 31),
    ("sonobi.com", 31),
    ("*.go.sonobi.com", 31),
    ("spoutable.com", 32),
    ("freewheel.tv", 33),
    ("cdn.stickyadstv.com", 33),
    ("stickyad:freewheel.tv", 33),
    ("connatix.com", 34),
    ("t.brand-server.com", 35),
    ("positivemobile.com", 36),
    ("memeglobal.com", 37),
    ("kixer.com", 38),
    ("sekindo.com", 39),
    ("sekindo", 39),
    ("360yield.com", 40),
    ("improvedigital.com", 40),
    ("adform.com", 41),
    ("adform.net", 41),
    ("adx.adform.net", 41),
    ("inner-active.com", 43),
    ("spotxchange.com", 44),
    ("spotx.tv", 44),
    ("streamrail.net", 45),
    ("sdk.streamrail.com", 45),
    ("mathtag.com", 46),
    ("mediamath.com", 46),
    ("adyoulike.com", 47),
    ("indexexchnage.com", 48),
    ("indexexchange.com", 48),
    ("www.indexexchange.com", 48),
    ("indexechange.com", 48),
    ("indexexchange(ebda)", 48),
    ("indexexchange(pubmatic)", 48),
    ("indexexchange(videossp)", 48),
    ("index.com", 48),
    ("kiosked.com", 50),
    ("ads.kiosked.com", 50),
    ("video.unrulymedia.com", 51),
    ("brightcom.com", 52),
    ("rs-stripe.com", 53),
    ("fyber.com", 54),
    ("tidaltv.com", 55),
    ("nativo.com", 56),
    ("jadserve.postrelease.com", 56),
    ("media.net", 57),
    ("www.yumenetworks.com", 58),
    ("yume.com", 58),
    ("yumenetworks.com", 58),
    ("revcontent.com", 59),
    ("revontent.com", 59),
    ("outbrain.com", 60),
    ("zedo.com", 61),
    ("freeskreen.com", 62),
    ("bidtellect.com", 63),
    ("smartadserver.com", 64),
    ("loopme.com", 65),
    ("vidazoo.com", 66),
    ("vidazoo", 66),
    ("videoflare.com", 67),
    ("yahoo.com", 68),
    ("pixfuture.com", 69),
    ("oms.eu", 70),
    ("stroeer.com", 71),
    ("emxdgt.com", 9),
    ("c1exchange.com", 73),
    ("synacor.com", 74),
    ("sfx.freewheel.tv", 33),
    ("videologygroup.com", 76),
    ("tremorhub.com", 77),
    ("altitudedigital.com", 78),
    ("platform.videologygroup.com", 76),
    ("imonomy.com", 80),
    ("komoona ltd", 81),
    ("komoonaltd", 81),
    ("springserve.com", 82),
    ("spingserve.com", 82),
    ("triplelift.com", 83),
    ("www.triplelift.com", 83),
    ("ib.adnxs.com", 84),
    ("appnexus.com", 84),
    ("appnexus", 84),
    ("apnexus.com", 84),
    ("appnexus.txt", 84),
    ("adnxs.com", 84),
    ("appnexus.com<http://appnexus.com>", 84),
    ("s.ntv.io/serve", 85),
    ("coxmt.com", 86),
    ("undertone.com", 87),
    ("advertising.com", 88),
    ("c.algovid.com", 89),
    ("lockerdome.com", 90),
    ("widespace.com", 91),
    ("deployads.com", 92),
    ("www.mobfox.com", 93),
    ("mobfox.com", 93),
    ("teads.tv", 94),
    ("teads.com", 94),
    ("publishers.teads.tv", 94),
    ("contextweb.com", 95),
    ("pulsepoint.com", 95),
    ("pulsepoint", 95),
    ("pulsepoint:contextweb.com", 95),
    ("districtm.com", 96),
    ("districtm.ca", 96),
    ("districtm.io", 96),
    ("sharethrough.com", 97),
    ("media.adfrontiers.com", 98),
    ("adfrontiers.com", 98),
    ("media.adfrontiers", 98),
    ("ad3media.com", 99),
    ("ads.admized.com", 100),
    ("admized.com", 100),
    ("a.twiago.com", 101),
    ("twiago.com", 101),
    ("xapads.com", 102),
    ("ad-stir.com", 104),
    ("ad.yieldlab.net", 105),
    ("yieldlab.de", 105),
    ("yieldlab.net", 105),
    ("ad3.io", 99),
    ("ad6media.es", 107),
    ("ad6media.fr", 107),
    ("www.ad6media.fr", 107),
    ("adbistro.com", 108),
    ("adcolony.com", 109),
    ("adingo.jp", 110),
    ("adingo.jp<http://adingo.jp>", 110),
    ("admanmedia.com", 111),
    ("admedia.com", 112),
    ("admixer.com", 113),
    ("admixer.net", 113),
    ("ads.stickyadstv.com", 33),
    ("ads4pics.com", 115),
    ("adtech.com<http://adtech.com>", 11),
    ("aolcloud.com", 11),
    ("aolcloud.net<http://aolcloud.net>", 11),
    ("adunity.com", 117),
    ("advbo.ammadv.it", 118),
    ("Advertise.com", 119),
    ("advertising.com<http://advertising.com>", 88),
    ("aerserv.com", 120),
    ("andbeyond.media", 121),
    ("app.tv", 122),
    ("apptv.com", 122),
    ("aralego.com", 123),
    ("atemda.com", 124),
    ("aximusag", 125),
    ("aximus.ch", 125),
    ("baronsmedia.com", 126),
    ("bidsxchange.com", 128),
    ("bidtheatre.com", 129),
    ("buysellads.com", 131),
    ("carambo.la", 132),
    ("carambola.com", 132),
    ("cedato.com", 133),
    ("clickio.com", 134),
    ("collectiveuk.com", 135),
    ("connectignite.com", 136),
    ("converge-digital.com", 137),
    ("crimtan.com", 138),
    ("defymedia.com", 139),
    ("distrcitm.io", 96),
    ("districtmadexchange", 96),
    ("districtm", 96),
    ("districtm.net", 96),
    ("districtmio.com", 96),
    ("distroscale.com", 141),
    ("dynadmic", 142),
    ("e-planning.net", 49),
    ("eadv.it", 144),
    ("easyplatform.com", 145),
    ("eboundservices.com", 146),
    ("electric-sheep.tv", 147),
    ("firstimpression.io", 148),
    ("geekexchange.com", 149),
    ("getintent.com", 150),
    ("glucompany.com", 151),
    ("gmossp.jp", 152),
    ("gobrowsi.com", 153),
    ("gourmetads.com", 154),
    ("hiro-media.com", 155),
    ("ibillboard.com", 156),
    ("increaserev.com", 157),
    ("infolinks.com", 158),
    ("insticator.com", 159),
    ("justpremium.com", 160),
    ("jwdemandadexchange", 161),
    ("keenkale.com", 162),
    ("lifestreet.com", 163),
    ("linicom", 164),
    ("madadsmedia.com", 165),
    ("mediabong.net", 166),
    ("mediadeguate.com", 167),
    ("memevideoad.com", 37),
    ("stinger.memeglobal.com", 37),
    ("mgid.com", 169),
    ("monarchads.com", 170),
    ("netseer.com", 171),
    ("oogle.com", 8),
    ("ooyala.com", 173),
    ("optimatic.com", 174),
    ("padsquad.com", 175),
    ("paypal.com", 176),
    ("playtouch", 177),
    ("playtouch2", 177),
    ("playwire.com", 178),
    ("powerlinks.com", 179),
    ("pubgears.com", 180),
    ("purch.com", 181),
    ("servebom.com", 181),
    ("q1media.com", 182),
    ("q1connect.com", 182),
    ("quantcast.com", 183),
    ("quantum-advertising.com", 184),
    ("reklamstore.com", 185),
    ("rekmob.com", 186),
    ("smartadserver:smartadserver.com", 64),
    ("smartadsever.com", 64),
    ("smartclip.net", 188),
    ("smartyads.com", 189),
    ("somoaudience.com", 190),
    ("SpotIM", 191),
    ("sprout-ad.com", 192),
    ("ssphwy.com", 193),
    ("startapp.com", 194),
    ("synapsys.us", 195),
    ("tabletmedia.co.uk", 196),
    ("tappx.com", 197),
    ("themoneytizer.com", 198),
    ("thetradedesk.com", 199),
    ("thrive.plus", 200),
    ("tisoomi-services.com", 201),
    ("tribalfusion.com", 202),
    ("trion.com", 203),
    ("trioninteractive.com", 203),
    ("truex.com", 204),
    ("turf.digital", 205),
    ("ubm.com", 206),
    ("udmserve.net", 207),
    ("valueclickmedia.com", 208),
    ("vertamedia.com", 209),
    ("vertoz.com", 210),
    ("vi.ai", 211),
    ("www.vi.ai", 211),
    ("x.fidelity-media.com", 212),
    ("yandex.ru", 213),
    ("yellowhammer.com", 214),
    ("rockyou.com", 215),
    ("rockyou.net", 215),
    ("innity.com", 216),
    ("innity.net", 216),
    ("advenueplatform.com", 216),
    ("nativeads.com", 217),
    ("natiiveads.com", 217),
    ("richaudience.com", 218),
    ("adstanding.com", 219),
    ("www.mass2.com", 220),
    ("RTK.io", 221),
    ("atomx.com", 222),
    ("ato.mx", 222),
    ("rtb.ato.mx", 222),
    ("p.ato.mx", 222),
    ("addroplet.com", 223),
    ("Liondigitalserving.com", 224),
    ("sulvo.com", 225),
    ("surgeprice.com", 226),
    ("mediabong.com", 227),
    ("babaroll.com", 228),
    ("juicenectar.com", 229),
    ("adpone.com", 230),
    ("onetag.com", 231),
    ("onetag-sys.com", 231),
    ("betweendigital.com", 232),
    ("ads.betweendigital.com", 232),
    ("experian.com", 233),
    ("altitude-arena.com", 78),
    ("gammassp.com", 234),
    ("ambientdigitalgroup.com", 234),
    ("cynogage.com", 235),
    ("deepintent.com", 236),
    ("adversal.com", 237),
    ("vmg.host", 238),
    ("Chocolateplatform.com", 239),
    ("directadvert.ru", 240),
    ("backbeatmedia.com", 241),
    ("videmob.com", 242),
    ("ligadx.com", 243),
    ("vidstart.com", 244),
    ("mobileadtrading.com", 245),
];
