//! Test Fixtures - Reference Series
//!
//! Published input series and the outputs they are known to produce,
//! shared by the integration tests. NaN marks warm-up outputs.

#![allow(dead_code)]

/// TA-Lib reference close series.
pub const CLOSE_252: [f64; 252] = [
    91.5, 94.815, 94.375, 95.095, 93.78,
    94.625, 92.53, 92.75, 90.315, 92.47,
    96.125, 97.25, 98.5, 89.875, 91.0,
    92.815, 89.155, 89.345, 91.625, 89.875,
    88.375, 87.625, 84.78, 83.0, 83.5,
    81.375, 84.44, 89.25, 86.375, 86.25,
    85.25, 87.125, 85.815, 88.97, 88.47,
    86.875, 86.815, 84.875, 84.19, 83.875,
    83.375, 85.5, 89.19, 89.44, 91.095,
    90.75, 91.44, 89.0, 91.0, 90.5,
    89.03, 88.815, 84.28, 83.5, 82.69,
    84.75, 85.655, 86.19, 88.94, 89.28,
    88.625, 88.5, 91.97, 91.5, 93.25,
    93.5, 93.155, 91.72, 90.0, 89.69,
    88.875, 85.19, 83.375, 84.875, 85.94,
    97.25, 99.875, 104.94, 106.0, 102.5,
    102.405, 104.595, 106.125, 106.0, 106.065,
    104.625, 108.625, 109.315, 110.5, 112.75,
    123.0, 119.625, 118.75, 119.25, 117.94,
    116.44, 115.19, 111.875, 110.595, 118.125,
    116.0, 116.0, 112.0, 113.75, 112.94,
    116.0, 120.5, 116.62, 117.0, 115.25,
    114.31, 115.5, 115.87, 120.69, 120.19,
    120.75, 124.75, 123.37, 122.94, 122.56,
    123.12, 122.56, 124.62, 129.25, 131.0,
    132.25, 131.0, 132.81, 134.0, 137.38,
    137.81, 137.88, 137.25, 136.31, 136.25,
    134.63, 128.25, 129.0, 123.87, 124.81,
    123.0, 126.25, 128.38, 125.37, 125.69,
    122.25, 119.37, 118.5, 123.19, 123.5,
    122.19, 119.31, 123.31, 121.12, 123.37,
    127.37, 128.5, 123.87, 122.94, 121.75,
    124.44, 122.0, 122.37, 122.94, 124.0,
    123.19, 124.56, 127.25, 125.87, 128.86,
    132.0, 130.75, 134.75, 135.0, 132.38,
    133.31, 131.94, 130.0, 125.37, 130.13,
    127.12, 125.19, 122.0, 125.0, 123.0,
    123.5, 120.06, 121.0, 117.75, 119.87,
    122.0, 119.19, 116.37, 113.5, 114.25,
    110.0, 105.06, 107.0, 107.87, 107.0,
    107.12, 107.0, 91.0, 93.94, 93.87,
    95.5, 93.0, 94.94, 98.25, 96.75,
    94.81, 94.37, 91.56, 90.25, 93.94,
    93.62, 97.0, 95.0, 95.87, 94.06,
    94.62, 93.75, 98.0, 103.94, 107.87,
    106.06, 104.5, 105.0, 104.19, 103.06,
    103.42, 105.27, 111.87, 116.0, 116.62,
    118.28, 113.37, 109.0, 109.7, 109.25,
    107.0, 109.19, 110.0, 109.2, 110.12,
    108.0, 108.62, 109.75, 109.81, 109.0,
    108.75, 107.87,
];

/// T2(5, 0.7) reference output over `CLOSE_252`.
pub const T2_5_07: [f64; 252] = [
    f64::NAN, f64::NAN, f64::NAN, f64::NAN, f64::NAN,
    f64::NAN, f64::NAN, f64::NAN, f64::NAN, f64::NAN,
    f64::NAN, f64::NAN, f64::NAN, f64::NAN, f64::NAN,
    f64::NAN, 92.0044568243947, 90.9106552300891, 90.6463586117023, 90.3084789205821,
    89.6720318471145, 88.9037330268271, 87.5868579432908, 85.954836747529, 84.7005689226793,
    83.3523059748042, 83.0163975793717, 84.2660643852264, 85.1176135911474, 85.6427395123674,
    85.7165681320408, 86.0751957584689, 86.140409173301, 86.8473111861948, 87.4970708331533,
    87.6048769412892, 87.488062301966, 86.8503710976517, 86.0051055913755, 85.1927012416353,
    84.4467122098669, 84.3956243005882, 85.4784696460591, 86.7786339123798, 88.2748002348627,
    89.4328274428217, 90.3867138045761, 90.4714485689839, 90.7084412329033, 90.8097494019844,
    90.4787037811205, 90.0101497178812, 88.5024198173377, 86.7769594325732, 85.1537144359201,
    84.4121504654475, 84.3559107509575, 84.6880031678679, 85.7541280958136, 86.9331902355681,
    87.7493821516911, 88.2402777826517, 89.3417020909754, 90.2922826344589, 91.3977179024685,
    92.3653453592751, 92.9818546928725, 92.9880495375639, 92.3587303025215, 91.5600144444225,
    90.6680945082811, 89.0485112374631, 87.0968137694757, 85.8148961555424, 85.2990958278318,
    87.8727811269724, 91.5793016695658, 96.0971814590537, 100.170045549055, 102.362635872679,
    103.392356830357, 104.285071558306, 105.257013533697, 105.973108005379, 106.425542792531,
    106.312015658357, 106.956736925872, 107.855377454075, 108.907794723626, 110.302938574975,
    113.942463168749, 116.725550203185, 118.387706013061, 119.397532122633, 119.614867265106,
    119.118505737986, 118.152169107481, 116.412341127148, 114.45865964016, 114.640611621247,
    114.99246753582, 115.333330184797, 114.646253007116, 114.181955890364, 113.6996350611,
    114.050258106238, 115.686527100135, 116.482110793846, 116.917361667442, 116.714121735925,
    116.107160214806, 115.771161219893, 115.681591568746, 116.844720841961, 118.059797983794,
    119.164968811323, 120.945938697219, 122.230960102793, 122.956084712967, 123.226562095673,
    123.398205745395, 123.34529134741, 123.702941923609, 125.213561512174, 127.193551957471,
    129.192662954223, 130.452627280115, 131.602566643397, 132.724821169812, 134.37601221394,
    135.924612676739, 137.094245258916, 137.703884834217, 137.73781691122, 137.525899637787,
    136.8626085047, 134.643676313369, 132.542157300252, 129.697297721154, 127.442873097815,
    125.453019273691, 124.781496770569, 125.23737028614, 125.288347655219, 125.298114732302,
    124.491181330746, 122.911672044279, 121.217914147416, 120.986265016201, 121.390130896499,
    121.631146118369, 121.096677816303, 121.386049043932, 121.376836027002, 121.817149639684,
    123.276809919703, 125.040653016955, 125.422314789926, 125.028719765659, 124.161846983589,
    123.953482106599, 123.420968486847, 122.98054879392, 122.801754034863, 123.005061642906,
    123.103412737828, 123.476546211695, 124.506862759462, 125.207800134107, 126.360561795565,
    128.161933387608, 129.48687497042, 131.310080396495, 132.949864055721, 133.527520164833,
    133.82004244574, 133.59810463804, 132.762028944064, 130.77137039821, 129.942734817474,
    128.955933567687, 127.669886730482, 125.803912336666, 124.871503658693, 123.990295241987,
    123.455757760789, 122.351398245791, 121.538363326568, 120.240815785331, 119.586852327361,
    119.819802475261, 119.65181893967, 118.731836137946, 117.086433521172, 115.743802634332,
    113.791591291984, 110.893854196028, 108.788095109018, 107.63783653194, 106.884670240717,
    106.494468449692, 106.317886400748, 102.459363407727, 98.9228602571164, 96.2632014659856,
    94.8983013067355, 93.7121424168089, 93.3549340295879, 94.1909122265566, 94.9322289092733,
    95.0535233535592, 94.8588423363184, 93.9437417276706, 92.6820104682145, 92.4677844270014,
    92.5885593033734, 93.619956921015, 94.2714101593987, 94.8727684170703, 94.8983148051919,
    94.8577689432134, 94.5924506086546, 95.3216341526, 97.6462324340446, 100.945957828784,
    103.426369804626, 104.709174740849, 105.404588874599, 105.525234924366, 105.123397592557,
    104.688756449843, 104.754827702706, 106.535479021162, 109.485157314697, 112.331287255134,
    114.909669258305, 115.641614204409, 114.514414417486, 113.131132083205, 111.816632978836,
    110.247878398327, 109.443400739727, 109.260329362709, 109.139940507927, 109.294513876637,
    109.008971044765, 108.791384781149, 108.918089519623, 109.152666935574, 109.184357087896,
    109.084482843048, 108.753048847087,
];

/// T3(5, 0.7) reference output over `CLOSE_252`.
pub const T3_5_07: [f64; 252] = [
    f64::NAN, f64::NAN, f64::NAN, f64::NAN, f64::NAN,
    f64::NAN, f64::NAN, f64::NAN, f64::NAN, f64::NAN,
    f64::NAN, f64::NAN, f64::NAN, f64::NAN, f64::NAN,
    f64::NAN, f64::NAN, f64::NAN, f64::NAN, f64::NAN,
    f64::NAN, f64::NAN, f64::NAN, f64::NAN, 85.7298756737179,
    84.3653623895779, 83.4821283349961, 83.6487802207527, 84.2077478000361, 84.8140022624377,
    85.2116245986709, 85.6197795358472, 85.8836656465792, 86.3750719606217, 86.9636060637729,
    87.337155847971, 87.4758153832031, 87.2270424677263, 86.6613834388821, 85.9398842053554,
    85.1714918011768, 84.7244766890823, 85.0186552094379, 85.8361275749773, 87.0356306436977,
    88.2725752638162, 89.4175897806162, 90.0755914533444, 90.5278838453218, 90.7984930563717,
    90.7581699961507, 90.4801259590211, 89.5672188532377, 88.1996129474603, 86.6401290448746,
    85.4193255238329, 84.7373428697986, 84.5542144141793, 85.0089060379763, 85.8702240344147,
    86.770166547509, 87.5189361511518, 88.470345818118, 89.4547401883457, 90.525744089042,
    91.5716941141709, 92.4261488267763, 92.8706801637941, 92.7736235068667, 92.2939046615678,
    91.5631031818609, 90.3470608503046, 88.7081510949477, 87.1739940007027, 86.0889664824729,
    86.7772147701018, 89.0169092028569, 92.5057804552432, 96.4466124562832, 99.683741180825,
    101.923539159025, 103.518645202038, 104.787911337597, 105.754242716902, 106.429232035698,
    106.673315218104, 107.056849301097, 107.655520665635, 108.458318247037, 109.547129330163,
    111.89434730682, 114.525744053496, 116.752286131256, 118.417266472919, 119.372428877724,
    119.581217465199, 119.150168737251, 117.997120108914, 116.35343432693, 115.501331093827,
    115.199001495953, 115.208328529716, 114.890458552864, 114.495059356546, 114.048735812078,
    113.98299653094, 114.761206311372, 115.598842773908, 116.28205585323, 116.556933901322,
    116.399830493994, 116.133221662203, 115.930710302812, 116.38166637287, 117.227579503246,
    118.236315352488, 119.658522502904, 121.061893500738, 122.170015598311, 122.882088708184,
    123.320755139934, 123.498454360082, 123.735265071548, 124.57544794795, 125.987759395632,
    127.726773477662, 129.278527793063, 130.660844453851, 131.92850098151, 133.387632858521,
    134.903049402941, 136.261895271058, 137.256356114575, 137.764653140411, 137.883977126083,
    137.572947955951, 136.270974869991, 134.484099919083, 132.083341633472, 129.649058811533,
    127.34920616402, 125.788062109118, 125.205251210268, 124.974715199648, 124.911877816566,
    124.532364529517, 123.58691150647, 122.263624139739, 121.446055735673, 121.229049684293,
    121.268330126839, 121.064805374909, 121.119361689935, 121.168736727669, 121.429067766122,
    122.301502350506, 123.659941854355, 124.603695296474, 124.921674758158, 124.651088381838,
    124.374600341585, 123.944585861262, 123.479972311863, 123.130575127931, 123.038146644219,
    123.041473964386, 123.232255668733, 123.847901243235, 124.537419939088, 125.48193174896,
    126.880010892413, 128.291564451678, 129.943078743959, 131.630646179765, 132.809665568573,
    133.556446700516, 133.809134913751, 133.489244860833, 132.29305889081, 131.187233454374,
    130.07504168974, 128.827654882596, 127.23236569221, 125.908786992191, 124.774463084738,
    123.921859930311, 122.951226968843, 122.055703167342, 120.965853808651, 120.081201067189,
    119.746981172199, 119.524404968477, 118.989869949446, 117.919209349287, 116.694432223637,
    115.0900468905, 112.816042429025, 110.562315088832, 108.801174302196, 107.520970680175,
    106.690525923725, 106.213326199815, 104.126466214927, 101.284782147211, 98.459098053663,
    96.2919654244885, 94.5940438966966, 93.5667878417156, 93.4953907344503, 93.9033603418944,
    94.2582984032293, 94.4092295943194, 94.0788845752426, 93.3002023012997, 92.7807005779447,
    92.5740879570196, 92.9881068881615, 93.5608091110847, 94.188296474836, 94.5557215309443,
    94.7372650538305, 94.7016291992604, 95.0301498197575, 96.3450164034449, 98.6871801925784,
    101.191763024406, 103.18034967184, 104.574015654868, 105.344691184958, 105.510820251604,
    105.329117204892, 105.209510601637, 105.976372433776, 107.821387812387, 110.217699229573,
    112.778111952713, 114.510752615047, 114.855390967963, 114.294405922446, 113.273182580164,
    111.890520010754, 110.700187389875, 109.942006146259, 109.470438066364, 109.299699504621,
    109.08364080071, 108.872942563877, 108.832181466013, 108.938293054051, 109.024766043372,
    109.032103412758, 108.879150004493,
];

/// JMA(5, 0) output over `CLOSE_252`, starting at index 30.
pub const JMA_5_0: [f64; 222] = [
    85.25, 85.60297422656778, 85.84456393918406, 86.70579033509588, 87.5187202513631,
    87.67306876713954, 87.48549245906017, 86.7510915620611, 85.80092771927404, 84.94150586610921,
    84.2192124886084, 84.25695455046939, 85.97646834141979, 87.58002213211194, 89.23804186234311,
    90.20318796755758, 90.85919437749713, 90.65435108729216, 90.62990158623623, 90.61965629065493,
    90.2327774460329, 89.71363395396052, 87.57022623226163, 85.53588116866179, 83.99573747098009,
    83.64059498980683, 84.05366501651467, 84.76681252024471, 86.33570887987183, 87.70688536613281,
    88.43389589494285, 88.70260038163059, 89.82915157390238, 90.68223065902143, 91.74780126451097,
    92.60579931486194, 93.07675916271606, 92.91660022727439, 92.10693508798869, 91.16512389820863,
    90.22913361714026, 88.03835524411639, 85.6110966211101, 84.6170735738152, 84.6275908726943,
    91.7992600043612, 97.2326038694772, 102.53738264718585, 105.23088097828052, 105.21972790251014,
    104.4411089495408, 104.20799472958511, 104.81085562361858, 105.37136768332135, 105.76508498681119,
    105.63400370993789, 106.45624447179816, 107.59772576194811, 108.86695842226413, 110.64096828416832,
    118.31833821028353, 120.408287536265, 120.51015211697825, 120.19024515758514, 119.5371268618454,
    118.51358047774156, 117.22647641757999, 114.8242423758885, 112.61220397746496, 114.13689350410826,
    115.11409526042259, 115.64043457911363, 114.64209069905706, 114.01277327054132, 113.52684275228037,
    113.95846104893056, 116.672667605311, 117.57486951708886, 117.66685972331061, 117.06632803322847,
    116.11107721321976, 115.58036184851768, 115.47674188053053, 117.20729187077316, 118.59962815729122,
    119.64478258666425, 121.88904813351054, 123.03769497224354, 123.40688181998661, 123.3174304882256,
    123.23152696436848, 123.05197334546345, 123.38121525857954, 125.72464545307929, 128.40322724921307,
    130.55636753068435, 131.3967556551336, 132.0628230139296, 132.8938195693133, 134.91020190430433,
    136.50683407467923, 137.4273068801492, 137.72085121945085, 137.47433943189705, 137.06687716375555,
    136.31152386289517, 132.7096681016469, 130.49234835780834, 127.00148951893968, 125.30134035591853,
    124.0169085273041, 124.10872859510954, 125.38465850595537, 125.87773702573207, 125.95115492133274,
    124.85817370107144, 122.4814047299595, 120.42035567402988, 120.50517954002001, 121.36116855332337,
    121.9177251694582, 121.44452394775118, 121.65307295646907, 121.64203356770071, 122.05038074227981,
    124.04512422076593, 126.16641751273875, 126.2474077204058, 125.29021670661159, 123.92569518535934,
    123.54520509554379, 123.07827028081928, 122.70809663727115, 122.62053624032418, 122.93956433721183,
    123.1430409370761, 123.56199540720141, 124.66493292359229, 125.43498352295738, 126.62083831760896,
    128.95025130255456, 130.2307348868068, 132.25362855415705, 133.76807630607343, 133.96767699547487,
    133.82984827712164, 133.3158419636879, 132.28882703345528, 129.29747087077914, 128.554077068969,
    128.02325691278205, 127.02219703088187, 124.8459798235106, 124.10560643289594, 123.61304307357386,
    123.38010645326123, 122.30240208977936, 121.53393946647016, 120.08685931704233, 119.47739524844911,
    119.90580143995851, 119.9374790307227, 118.89503566068029, 116.61116568052682, 115.19844706057485,
    112.81807385314545, 108.61456559966341, 106.92610882121379, 106.62244028464583, 106.63526241950923,
    106.73443917500681, 106.81035205339661, 97.63620545617995, 94.38545958767685, 93.4435308952658,
    93.65391371986232, 93.56532193055403, 93.82558995878216, 95.10811055290738, 96.03755498888758,
    96.06089119653447, 95.59406915682368, 94.27582689496136, 92.62071117498748, 92.32390764585134,
    92.60694574242451, 94.00855602904142, 94.80004476831064, 95.3282318815731, 95.20545838292747,
    94.97983578462758, 94.5886801457484, 95.28780407912015, 99.26516159480995, 104.21610911750277,
    106.14204673823149, 106.33926662876334, 106.02931556145597, 105.47026809425942, 104.67322181814272,
    104.05882581604826, 104.14487937317598, 107.26982079540414, 112.02231848955866, 114.99185588861333,
    117.02766980356645, 116.67311034302217, 113.50052035548187, 111.4178589682452, 110.17666078090454,
    108.79440929546179, 108.37890195795036, 108.66153569926544, 108.92544247905641, 109.30547441391609,
    109.12379072549531, 108.88653030950533, 109.00461705206806, 109.2712697724006, 109.31344992964276,
    109.17403481964246, 108.78421724388822,
];

/// RSI(9) reference output over `CLOSE_252`.
pub const RSI_9: [f64; 252] = [
    f64::NAN, f64::NAN, f64::NAN, f64::NAN, f64::NAN,
    f64::NAN, f64::NAN, f64::NAN, f64::NAN, 53.5819793205318,
    64.394717275077, 67.0523285101713, 69.8640477017722, 42.0249160101556, 45.2275691029251,
    50.2188296873972, 41.6156024740806, 42.1939556108101, 49.0125291783751, 44.4818922886583,
    40.841412459523, 39.0439823616895, 32.8704894120665, 29.5786035476125, 31.7389050779923,
    27.6791165067558, 40.109712246367, 54.0526874367491, 46.7362711293757, 46.4288781150074,
    43.8341320855228, 49.7570485116379, 45.9485200601159, 55.2327095028511, 53.5915313236694,
    48.4274379711367, 48.2307557652475, 42.0226386937257, 39.978529862185, 38.9971744072257,
    37.3595542329995, 47.8335576505982, 60.6779592237149, 61.4023119714648, 66.0587366098495,
    64.2412187874543, 66.3258424916702, 53.8394067248078, 60.6675068337107, 58.2443858458745,
    51.4478717999023, 50.4786711214129, 34.8843050568549, 32.9166657805519, 30.8816892956101,
    41.2698648716301, 45.3307714001445, 47.7342322524843, 58.3283780520391, 59.4710273370356,
    56.1350610542554, 55.4670669209385, 67.5328315160145, 64.8552684147346, 69.8607899458026,
    70.5352349891745, 68.1670226666097, 58.911518794075, 49.7947956946679, 48.2798731300364,
    44.2941991545023, 31.1948236555114, 26.8027053538953, 35.275511560124, 40.7533233760533,
    70.5405011052599, 73.9590473256506, 79.1987649876751, 80.1396092580988, 68.6119055280289,
    68.3118513182073, 71.5396972086565, 73.6493325088539, 73.1509543872878, 73.256821008086,
    66.7018642887352, 73.9781527109991, 75.0367545763183, 76.855858027664, 79.9732009645943,
    88.1519206154487, 76.5687425862121, 73.7425553321252, 74.351154991875, 69.596485135487,
    64.2996805755869, 60.0174002119847, 50.0688472410155, 46.7058032915004, 63.1062396098654,
    57.4895447338607, 57.4895447338607, 47.4321128090702, 51.5996308281419, 49.5539642042664,
    56.8280563263487, 65.1434028163501, 54.888494102488, 55.657597920592, 51.1404036499621,
    48.7495276685755, 51.948921254567, 52.9757521803745, 64.1905467934176, 62.452370264283,
    63.6911824176365, 71.3001681507238, 65.9370679340647, 64.2431434970161, 62.6431951334333,
    64.1244660947396, 61.3861251023997, 67.1852740448369, 76.2167446038304, 78.7085006182147,
    80.3618311722436, 73.9055419948688, 76.9254116379686, 78.7448023465351, 83.0223263305941,
    83.4976371660451, 83.5818167430074, 79.4769700569471, 73.424071130372, 73.0247080910069,
    62.6706643989583, 38.4907512051899, 41.4768962345936, 30.1962853604319, 33.9020462549976,
    30.4053918675752, 42.4050417030907, 48.9011448767188, 41.4658465769599, 42.5112838620071,
    34.9599963133653, 29.9493795747625, 28.5583626986494, 44.2592300592758, 45.1555159794506,
    41.9488357992761, 35.6817615566459, 47.8543522681497, 42.8583670560854, 49.0110773134763,
    58.0458758255045, 60.2825121872644, 48.3909273916294, 46.3258957983568, 43.6448031054672,
    50.8749750856582, 44.9854917496581, 46.0509133669641, 47.8028434433075, 51.1234451759055,
    48.4725214488976, 53.0999381094028, 60.8635733077237, 55.5559330528125, 63.3470184649552,
    69.6356859165834, 64.6667516150421, 71.8881767226337, 72.2864345208126, 61.9406212356482,
    63.9982437314014, 58.7356935893916, 51.9326623741696, 39.6136258890891, 52.6142076033507,
    45.6262442541442, 41.6371699711812, 35.8147304519524, 44.0869169425776, 40.2010852339649,
    41.6476085855958, 35.079676073137, 38.0814720341907, 32.2765586455537, 39.0901286350131,
    45.3094662064395, 39.3467450789831, 34.2569575551818, 29.8377692896622, 32.4014445850286,
    26.279871299129, 21.0735888665786, 27.4256537563437, 30.2574402051156, 28.9850959545324,
    29.4454710906612, 29.2322758494825, 14.0132118014266, 22.3681826643226, 22.310117147612,
    27.2568854899274, 24.5587246053648, 30.5596440183891, 39.7575723951988, 37.2425965138036,
    34.1036903303138, 33.3857263088774, 28.9994390669816, 27.1300313398703, 39.490751826917,
    38.8478592237795, 48.7600751785025, 44.0112260208211, 46.5583251541805, 42.077978640219,
    43.9551835471507, 41.5988691128822, 54.8889655356058, 66.776711781159, 72.2246786728378,
    66.5687875600801, 61.8709222913164, 62.8170965692428, 60.0990913886955, 56.2774265403667,
    57.2516983501808, 62.1302271259302, 74.0267685445324, 78.7305126004284, 79.3617387230373,
    81.0552415761262, 63.6702241065156, 52.4139772241416, 53.8831930137956, 52.7063033929414,
    46.9394024354077, 52.6164396873775, 54.6359890838541, 52.1655830098371, 54.8091505148085,
    47.9407543209438, 50.0021526749285, 53.7566565498804, 53.963162259856, 50.5357389247752,
    49.4452962160377, 45.5529131513869,
];

/// TASC DEMA article input series.
pub const DEMA_TASC_INPUT: [f64; 316] = [
    451.61, 455.2, 453.29, 446.48, 446.17,
    440.86, 441.88, 451.61, 438.43, 406.33,
    328.45, 323.3, 326.39, 322.97, 312.49,
    316.47, 292.92, 302.57, 326.91, 333.19,
    330.47, 338.47, 340.14, 337.59, 344.66,
    345.75, 353.27, 357.12, 363.4, 373.37,
    375.48, 381.58, 372.54, 374.64, 381.83,
    373.9, 374.04, 379.23, 379.42, 372.48,
    366.03, 366.66, 376.86, 386.25, 386.92,
    391.62, 394.69, 394.33, 394.59, 387.35,
    387.33, 387.71, 378.95, 377.42, 374.43,
    376.51, 381.6, 383.91, 384.98, 387.71,
    385.67, 384.59, 388.59, 382.79, 381.02,
    373.76, 367.58, 366.38, 373.91, 375.21,
    375.8, 377.34, 381.38, 384.74, 387.09,
    391.66, 397.96, 406.35, 402.37, 407.19,
    399.96, 403.99, 405.9, 402.19, 400.94,
    406.73, 410.71, 417.68, 423.76, 427.55,
    430.74, 434.83, 442.05, 445.21, 451.63,
    453.65, 447.21, 448.36, 435.29, 442.42,
    448.9, 449.29, 452.82, 457.42, 462.48,
    461.97, 466.75, 471.34, 471.31, 467.57,
    468.07, 472.92, 483.64, 467.29, 470.67,
    452.76, 452.97, 456.19, 456.72, 456.63,
    457.1, 456.22, 443.84, 444.57, 454.82,
    458.22, 439.72, 440.88, 421.33, 422.21,
    428.84, 429.01, 419.52, 431.02, 436.76,
    442.16, 437.25, 435.54, 430.9, 436.31,
    425.79, 417.98, 428.61, 438.1, 448.31,
    453.69, 462.13, 460.87, 467.55, 459.33,
    462.29, 460.53, 468.44, 455.27, 442.59,
    417.46, 408.03, 393.49, 367.33, 381.21,
    380.38, 374.42, 362.25, 344.51, 347.36,
    327.55, 337.36, 334.36, 336.45, 341.95,
    350.85, 349.04, 359.06, 371.54, 368.83,
    373.6, 371.2, 367.24, 361.8, 376.99,
    394.28, 417.69, 436.8, 448.71, 448.95,
    456.73, 475.11, 466.29, 464.15, 482.3,
    495.79, 501.62, 501.19, 494.64, 492.1,
    493.42, 481.38, 492.67, 506.11, 498.54,
    495.07, 485.82, 475.92, 474.05, 492.71,
    497.55, 492.69, 505.67, 508.31, 512.47,
    521.06, 525.68, 516.94, 516.71, 527.19,
    524.48, 520.4, 519.05, 538.9, 525.13,
    540.93, 548.08, 531.29, 523.47, 523.9,
    536.3, 540.9, 535.76, 565.71, 592.65,
    615.7, 626.85, 624.68, 620.21, 634.95,
    636.43, 629.75, 633.47, 615.95, 618.62,
    624.28, 604.67, 590.01, 584.24, 591.81,
    572.89, 578.14, 585.76, 574.43, 580.3,
    585.31, 585.43, 569.52, 554.2, 547.84,
    563.35, 567.8, 570.52, 565.61, 580.83,
    573.74, 573.18, 563.7, 563.56, 573.44,
    583.01, 589.12, 577.2, 571.63, 570.52,
    582.61, 597.3, 605.17, 616.82, 637.16,
    642.6, 649.49, 661.6, 655.79, 661.29,
    665.88, 676.95, 677.21, 697.15, 701.64,
    696.34, 700.98, 690.54, 663.61, 670.77,
    681.37, 692.78, 682.72, 681.54, 669.85,
    665.26, 666.78, 658.41, 661.42, 681.44,
    676.37, 694.29, 700.53, 702.01, 693.19,
    689.59, 694.81, 704.49, 705.81, 699.73,
    700.24, 704.7, 718.08, 718.26, 730.96,
    734.07,
];

/// DEMA(26) reference output over `DEMA_TASC_INPUT`.
pub const DEMA_TASC_26: [f64; 316] = [
    448.351538461539, 444.04591642925, 440.143258766839, 435.897971971127, 432.272161086073,
    428.482338798688, 425.446607269457, 424.322219567334, 421.627691183114, 414.830337266969,
    397.845608122032, 382.168463885992, 368.845653182194, 356.702636306195, 344.61177746844,
    334.637355131717, 322.626541166039, 313.542885619795, 309.167280326404, 306.409169997631,
    303.803442102606, 302.857058422495, 302.479338211577, 301.99836086635, 302.789905058075,
    303.853767197439, 306.068552887854, 308.775613031829, 312.257657116681, 316.945897068075,
    321.575919539061, 326.711420727277, 330.125690356531, 333.585190708874, 337.802154985113,
    340.527798404468, 343.067683100597, 346.155580497962, 349.011538730281, 350.636844272501,
    351.229969905969, 351.90956337825, 354.028284457349, 357.309611668058, 360.377198856016,
    363.823307493944, 367.368279604684, 370.506077205224, 373.364045917866, 374.897892641776,
    376.278390079193, 377.576795206859, 377.495856968126, 377.216172706012, 376.550949997309,
    376.265726413044, 376.748678887917, 377.518899163972, 378.366954137742, 379.519775183086,
    380.262044116704, 380.774019297834, 381.80453838016, 381.897839166076, 381.730214522088,
    380.546886318274, 378.61348759035, 376.724175991839, 376.12187633061, 375.778824487549,
    375.565761799123, 375.60407835953, 376.222804747481, 377.260901830444, 378.527194106891,
    380.311781070336, 382.802809503631, 386.218559205682, 388.689683110975, 391.57096391806,
    393.095458635145, 395.015057213524, 396.982531675297, 398.188980799998, 399.066943460818,
    400.655940565303, 402.619369136005, 405.341434129345, 408.610247413734, 412.036540024281,
    415.514244717689, 419.16284342072, 423.406907639803, 427.598612038112, 432.204840845781,
    436.548700436193, 439.447956186896, 442.14025113812, 442.618006062622, 444.00456957917,
    446.109074269877, 447.984299420238, 450.102761040669, 452.590151258236, 455.471054249933,
    457.90666488479, 460.699024263728, 463.781038687297, 466.460565244199, 468.250883264894,
    469.853387009579, 471.909397012856, 475.206967196666, 475.747863624779, 476.647381886879,
    474.830714378327, 473.18207233394, 472.117093503929, 471.192264775846, 470.307124838733,
    469.540264811229, 468.68900476125, 466.12462403384, 463.907948518385, 463.363676925472,
    463.335220885319, 460.643525537394, 458.386510867157, 453.566400836476, 449.382595112852,
    446.592404498701, 444.127111286301, 440.576718003866, 439.057894034679, 438.530518785186,
    438.839035100586, 438.421293751782, 437.812770407462, 436.616641227997, 436.331583200456,
    434.586277850641, 431.927511108477, 431.088005953078, 431.708523448364, 433.732157660655,
    436.314603136704, 439.82803250568, 442.782849001684, 446.368348197838, 448.385884006898,
    450.597922888427, 452.307460075535, 454.94667941935, 455.404574305778, 453.987463203988,
    449.124905876917, 443.437007450405, 436.291980637824, 426.199402201042, 419.203765531915,
    412.879255270829, 406.428424085284, 398.986060316688, 389.873054011285, 382.217798651995,
    372.637269441893, 365.575623578955, 358.938598669968, 353.411719434307, 349.364879379403,
    347.124365590881, 344.965711845764, 344.56683470162, 346.08479690478, 347.139264928587,
    348.842811506318, 350.096783200496, 350.722716226641, 350.573905906249, 352.674945585439,
    357.076276198817, 364.393541670101, 373.685608546468, 383.697459525266, 392.671968474028,
    401.784863150407, 412.521296237012, 420.811207751663, 427.862716483693, 436.69665625267,
    446.445059175303, 455.90521224793, 464.20526001391, 470.589716548454, 475.832962732124,
    480.605770707249, 483.050354934442, 486.747671425879, 491.867386270111, 495.254920196811,
    497.682175372943, 498.429206626154, 497.588133521562, 496.481380127245, 498.07149481592,
    500.095823624092, 501.124057109156, 503.811066299455, 506.501569013775, 509.411634748198,
    513.148787759202, 517.055297335116, 519.204950141159, 521.002704878075, 524.015510764304,
    526.229326451321, 527.535660468578, 528.423885597401, 531.965785683991, 533.07598323047,
    536.238259682633, 539.995172911538, 540.865200451208, 540.442959587682, 540.049170317373,
    541.391948129153, 543.17146574211, 543.95135908248, 548.84776223941, 556.981453493351,
    567.438835139085, 578.259834025267, 587.494134392569, 594.977400773905, 603.634371809898,
    611.439295555105, 617.314906197813, 622.951225850627, 625.341753806191, 627.720619316483,
    630.51764053276, 630.083823931996, 627.481024108668, 624.220799162146, 622.286253499286,
    617.761320641557, 614.384683716115, 612.377952285024, 608.895114214281, 606.557454061919,
    605.123945952901, 603.803344647074, 600.300588550051, 594.943078378803, 589.218995840332,
    586.297147321943, 584.301065136373, 582.887243975156, 580.90678087274, 581.296208359022,
    580.616081260928, 579.915348529306, 577.925212244833, 576.120936762289, 575.914645509011,
    577.089458382352, 579.000829867, 578.994538863485, 578.184661726789, 577.29598867145,
    578.221701957771, 581.135093996343, 584.844324789377, 589.797906608978, 597.094815540137,
    604.346651506959, 611.756776161605, 620.04441732005, 626.548871716138, 633.070473514068,
    639.471363541022, 646.683271377349, 653.069484425627, 661.521726424902, 669.604214688067,
    675.953305916772, 682.170464756653, 686.114472460218, 685.67825370149, 686.204617845508,
    688.083436938278, 691.28514912652, 692.603132008749, 693.510521272614, 692.555070250427,
    690.956528179277, 689.661884959543, 687.232310813902, 685.420605622844, 686.591732417217,
    686.844239024644, 689.5597392627, 692.804003586067, 695.838968178331, 697.21654979349,
    697.861930191708, 699.114543399005, 701.5457986541, 703.834675663453, 704.940477348215,
    705.932691536944, 707.388388521591, 710.530469538489, 713.291400618608, 717.497513543985,
    721.621121944788,
];

/// Kaufman, Trading Systems and Methods, p. 72.
pub const KAUFMAN_INPUT: [f64; 51] = [
    64.59, 64.23, 65.26, 65.24, 65.07,
    65.14, 64.98, 64.76, 65.11, 65.46,
    65.94, 66.1, 66.87, 66.56, 66.71,
    66.19, 66.14, 66.64, 67.33, 68.18,
    67.48, 67.19, 66.46, 67.2, 67.62,
    67.66, 67.89, 69.19, 69.68, 69.31,
    69.11, 69.27, 68.97, 69.11, 69.5,
    69.7, 69.94, 69.11, 67.64, 67.75,
    67.47, 67.5, 68.18, 67.35, 66.74,
    67.0, 67.46, 67.36, 67.37, 67.78,
    67.96,
];

/// SMA(3) over `KAUFMAN_INPUT`, rounded to two decimals.
pub const SMA_3: [f64; 51] = [
    f64::NAN, f64::NAN, 64.69, 64.91, 65.19,
    65.15, 65.06, 64.96, 64.95, 65.11,
    65.5, 65.83, 66.3, 66.51, 66.71,
    66.49, 66.35, 66.32, 66.7, 67.38,
    67.66, 67.62, 67.04, 66.95, 67.09,
    67.49, 67.72, 68.25, 68.92, 69.39,
    69.37, 69.23, 69.12, 69.12, 69.19,
    69.44, 69.71, 69.58, 68.9, 68.17,
    67.62, 67.57, 67.72, 67.68, 67.42,
    67.03, 67.07, 67.27, 67.4, 67.5,
    67.7,
];

/// SMA(5) over `KAUFMAN_INPUT`, rounded to two decimals.
pub const SMA_5: [f64; 51] = [
    f64::NAN, f64::NAN, f64::NAN, f64::NAN, 64.88,
    64.99, 65.14, 65.04, 65.01, 65.09,
    65.25, 65.47, 65.9, 66.19, 66.44,
    66.49, 66.49, 66.45, 66.6, 66.9,
    67.15, 67.36, 67.33, 67.3, 67.19,
    67.23, 67.37, 67.91, 68.41, 68.75,
    69.04, 69.31, 69.27, 69.15, 69.19,
    69.31, 69.44, 69.47, 69.18, 68.83,
    68.38, 67.89, 67.71, 67.65, 67.45,
    67.35, 67.35, 67.18, 67.19, 67.39,
    67.59,
];

/// SMA(10) over `KAUFMAN_INPUT`, rounded to two decimals.
pub const SMA_10: [f64; 51] = [
    f64::NAN, f64::NAN, f64::NAN, f64::NAN, f64::NAN,
    f64::NAN, f64::NAN, f64::NAN, f64::NAN, 64.98,
    65.12, 65.31, 65.47, 65.6, 65.76,
    65.87, 65.98, 66.17, 66.39, 66.67,
    66.82, 66.93, 66.89, 66.95, 67.04,
    67.19, 67.37, 67.62, 67.86, 67.97,
    68.13, 68.34, 68.59, 68.78, 68.97,
    69.17, 69.38, 69.37, 69.17, 69.01,
    68.85, 68.67, 68.59, 68.41, 68.14,
    67.87, 67.62, 67.45, 67.42, 67.42,
    67.47,
];

/// Chande momentum oscillator book example.
pub const CMO_BOOK_INPUT: [f64; 13] = [
    101.0313, 101.0313, 101.125, 101.9687, 102.7813,
    103.0, 102.9687, 103.0625, 102.9375, 102.7188,
    102.75, 102.9063, 102.9687,
];

/// TRIMA(12) spreadsheet output over `CLOSE_252`.
pub const TRIMA_12: [f64; 252] = [
    f64::NAN, f64::NAN, f64::NAN, f64::NAN, f64::NAN,
    f64::NAN, f64::NAN, f64::NAN, f64::NAN, f64::NAN,
    f64::NAN, 93.5329761904762, 93.6096428571428, 93.5933333333333, 93.6425,
    93.7965476190476, 93.8471428571429, 93.6536904761905, 93.2340476190476, 92.6722619047619,
    92.1164285714286, 91.4207142857143, 90.612619047619, 89.8194047619047, 89.0209523809524,
    88.1838095238095, 87.2529761904762, 86.4233333333333, 85.7552380952381, 85.2686904761905,
    84.9748809523809, 85.0114285714286, 85.2830952380952, 85.6417857142857, 86.0116666666667,
    86.3584523809524, 86.665119047619, 86.8765476190476, 86.912380952381, 86.7941666666667,
    86.5613095238095, 86.2458333333333, 85.9720238095238, 85.7696428571429, 85.7852380952381,
    86.0032142857143, 86.5345238095238, 87.2704761904762, 88.0822619047619, 88.8627380952381,
    89.4853571428571, 89.8975, 89.9754761904762, 89.7304761904762, 89.2042857142857,
    88.4980952380952, 87.6863095238095, 86.8611904761905, 86.1930952380952, 85.8330952380952,
    85.7453571428571, 85.9447619047619, 86.4314285714286, 87.1248809523809, 87.9834523809524,
    88.8315476190476, 89.649880952381, 90.4035714285714, 91.0210714285714, 91.445119047619,
    91.6385714285714, 91.5315476190476, 91.0911904761905, 90.38, 89.4954761904762,
    88.8378571428571, 88.4852380952381, 88.7070238095238, 89.6653571428571, 91.2761904761905,
    93.4420238095238, 95.8794047619048, 98.2855952380953, 100.455119047619, 102.155952380952,
    103.36869047619, 104.309880952381, 104.971428571429, 105.562261904762, 106.165,
    107.145714285714, 108.482023809524, 110.00880952381, 111.624047619048, 113.304047619048,
    114.967738095238, 116.284761904762, 117.014047619048, 117.192023809524, 117.102142857143,
    116.729523809524, 116.169285714286, 115.445238095238, 114.951785714286, 114.69869047619,
    114.589166666667, 114.613571428571, 114.698928571429, 114.91380952381, 115.240357142857,
    115.554880952381, 115.801666666667, 115.98880952381, 116.165714285714, 116.403809523809,
    116.65380952381, 117.116666666667, 117.734285714286, 118.532142857143, 119.484761904762,
    120.410238095238, 121.302857142857, 122.061428571429, 122.711428571429, 123.365952380952,
    124.082857142857, 124.942857142857, 125.977142857143, 127.191666666667, 128.602857142857,
    130.03619047619, 131.411666666667, 132.705238095238, 133.894523809524, 134.893333333333,
    135.603333333333, 135.892142857143, 135.807380952381, 135.27, 134.31,
    132.95119047619, 131.339285714286, 129.795952380952, 128.39380952381, 127.246428571429,
    126.356666666667, 125.654285714286, 125.082857142857, 124.587380952381, 124.044285714286,
    123.504285714286, 122.850952380952, 122.352380952381, 122.002619047619, 121.841666666667,
    121.896428571429, 122.145952380952, 122.587380952381, 123.09, 123.51380952381,
    123.900714285714, 124.155476190476, 124.172142857143, 124.016428571429, 123.777380952381,
    123.581428571429, 123.373333333333, 123.264761904762, 123.367380952381, 123.756904761905,
    124.359047619048, 125.115952380952, 126.08119047619, 127.228095238095, 128.405,
    129.604523809524, 130.661666666667, 131.510476190476, 131.955952380952, 132.042857142857,
    131.82, 131.248809523809, 130.335, 129.303571428571, 128.233571428571,
    127.229047619048, 126.172380952381, 125.14119047619, 124.202142857143, 123.377619047619,
    122.648333333333, 121.872857142857, 121.167380952381, 120.451428571429, 119.751904761905,
    118.918571428571, 117.804047619048, 116.423095238095, 114.942380952381, 113.394761904762,
    111.855952380952, 110.329047619048, 108.702380952381, 107.168095238095, 105.590714285714,
    103.941904761905, 102.111666666667, 100.164047619048, 98.4604761904762, 97.1585714285714,
    96.19, 95.5278571428571, 95.1052380952381, 94.9071428571429, 94.8935714285714,
    94.6328571428571, 94.357380952381, 94.0745238095238, 93.9211904761905, 93.8928571428571,
    93.992380952381, 94.1976190476191, 94.5011904761905, 94.9654761904762, 95.7004761904762,
    96.6185714285715, 97.6811904761905, 98.9954761904762, 100.454047619048, 101.867857142857,
    102.962857142857, 103.753333333333, 104.433571428571, 105.140476190476, 105.875476190476,
    106.825476190476, 108.033333333333, 109.435952380952, 110.805714285714, 111.839285714286,
    112.381904761905, 112.412142857143, 111.999761904762, 111.355238095238, 110.631904761905,
    109.930476190476, 109.428333333333, 109.168571428571, 109.120714285714, 109.148333333333,
    109.138571428571, 109.115714285714,
];

/// KAMA(10, 2, 30) spreadsheet output over `CLOSE_252`.
pub const KAMA_10_2_30: [f64; 252] = [
    f64::NAN, f64::NAN, f64::NAN, f64::NAN, f64::NAN,
    f64::NAN, f64::NAN, f64::NAN, f64::NAN, f64::NAN,
    92.6574744421924, 92.7783471257434, 93.0592520064115, 92.9356368995325, 92.9000149644911,
    92.8990048732289, 92.8229942018608, 92.751605192862, 92.7414384525517, 92.6960363223993,
    92.3934372123882, 91.9139380062599, 90.765816272683, 90.0740111936089, 89.3620815288014,
    87.665628086104, 87.4895131032692, 87.4974604839614, 87.4487997113532, 87.4134797590652,
    87.3586513546248, 87.3571985565411, 87.3428271277309, 87.4342339727455, 87.4790967331831,
    87.4478089486627, 87.434105277218, 87.2779545841798, 87.1866387951289, 87.0799098978843,
    86.9861110535034, 86.9549433796085, 87.0479997922396, 87.0668566957271, 87.2090146571776,
    87.4600776240503, 87.8014795040326, 87.88260768776, 88.2803844203263, 88.5454141018648,
    88.5859031486005, 88.5965040436874, 88.271962144572, 87.8163354339468, 86.8611444903465,
    86.6741610056912, 86.5906930013157, 86.5766752991618, 86.6296450514704, 86.6650208354184,
    86.6783504731998, 86.6895963952268, 87.6981988794437, 88.509583505736, 89.9508715587081,
    90.9585930437125, 91.479467949218, 91.5092409530174, 91.4856744284233, 91.4717808315536,
    91.4557387469302, 91.1940009725015, 89.4266294004067, 88.8455374050859, 88.3697094609281,
    88.5930899916723, 89.1316678888979, 90.8601116442358, 93.2091460910382, 94.058165697751,
    94.9201636069605, 96.888975256653, 99.4062425239817, 101.120144946239, 102.376923766039,
    102.600673836817, 103.300385071098, 103.657850895787, 104.076485562763, 106.415909302028,
    112.134672732533, 113.505735850234, 114.25482834285, 115.008567323099, 115.349168221162,
    115.474404235701, 115.458695418813, 115.403377896836, 115.381970322292, 115.459668086682,
    115.492713990892, 115.508321148297, 115.301658886367, 115.238241622477, 115.153248100289,
    115.158019129615, 115.325795043463, 115.36029129525, 115.427255019037, 115.423665497845,
    115.409491899281, 115.410043136995, 115.426577834124, 115.774474079416, 116.093062762378,
    116.310196771757, 116.660310919667, 117.348701814302, 117.815388822188, 118.453129080443,
    119.349941940923, 119.808668997151, 120.617502421007, 122.045881746743, 123.970441653365,
    125.81384803266, 126.373896910569, 127.687248635435, 129.239343216422, 131.688094771334,
    133.523963808817, 135.000420739588, 135.628823340394, 135.737405965639, 135.800790421555,
    135.758324804518, 135.554371843248, 135.256985268096, 133.620482427649, 131.319279776192,
    128.793237960994, 128.406240587034, 128.403931603254, 128.079165648376, 127.841420174835,
    127.198898584481, 126.538154664979, 125.660707043854, 125.64406989027, 125.622949389765,
    125.597277102914, 125.185688402826, 125.115620709855, 124.991405015224, 124.96774406354,
    125.050843711344, 125.35544076718, 125.30592729854, 125.294038678317, 125.253075769221,
    125.241974721057, 125.188723751616, 125.16565982628, 125.134264344403, 125.126170843055,
    125.029352729539, 125.008210007836, 125.105812467222, 125.132138833923, 125.528439701759,
    126.255411734548, 126.980355776416, 128.564694039863, 129.855905463814, 130.09951042734,
    130.515689207065, 130.627378133797, 130.613663231418, 130.582137248314, 130.578036017585,
    130.461982622179, 130.259209765262, 129.090150314052, 128.759233015831, 128.321839685465,
    127.919491925399, 127.132678227863, 126.710733040051, 126.190902541068, 125.507711951356,
    125.365236059294, 125.068941727701, 124.678536730751, 123.171511807697, 122.324606930441,
    120.499604500139, 118.02262262718, 116.538908488118, 115.770004741423, 114.47620559913,
    112.869191070537, 111.733046349481, 105.8813879559, 103.73862658021, 101.770507349886,
    100.955642967309, 100.074083586611, 99.5051792798608, 99.419754840171, 99.2260466472373,
    98.8377738185378, 98.4351675572326, 98.3887252314702, 98.0891751313173, 98.0708172638065,
    98.0047820815841, 97.9717872707032, 97.9587393847739, 97.9160266616328, 97.8272391679346,
    97.8109932013579, 97.7811643727499, 97.7968786191168, 98.8421055702164, 100.39720961343,
    101.127831290515, 101.348618336777, 101.76325887561, 101.96992491077, 102.080318040465,
    102.213195577983, 102.649571779938, 104.166035053659, 105.917458284628, 107.129513239096,
    109.361081539521, 109.724682274086, 109.707133791241, 109.706874832514, 109.686759177554,
    109.631977869971, 109.622141790716, 109.627181675235, 109.593022378559, 109.631401073065,
    109.393798588384, 109.344535377114, 109.348768892423, 109.351051708172, 109.348950184372,
    109.331015985309, 109.294015067119,
];

/// Efficiency ratio of KAMA(10, 2, 30) over `CLOSE_252`.
pub const KAMA_ER_10: [f64; 252] = [
    f64::NAN, f64::NAN, f64::NAN, f64::NAN, f64::NAN,
    f64::NAN, f64::NAN, f64::NAN, f64::NAN, f64::NAN,
    0.268973538819424, 0.162279240253249, 0.260828327537148, 0.220067453625632, 0.118147046323842,
    0.0738775510204083, 0.129483982351813, 0.130785481083157, 0.0506182380216384, 0.101864573110893,
    0.332332761578045, 0.419481368489867, 0.559087204563977, 0.388527832721108, 0.439367311072056,
    0.658227848101266, 0.280905570449807, 0.00443821537024054, 0.238636363636364, 0.177914110429448,
    0.157232704402516, 0.0238095238095238, 0.0531723606473155, 0.286468330134357, 0.238483685220729,
    0.270802560315116, 0.13724357122219, 0.303082784897818, 0.17844017966517, 0.190993164455167,
    0.157100963552576, 0.133360689372179, 0.231719876416066, 0.0403087478559176, 0.204838080374561,
    0.335062689148292, 0.379253792537926, 0.324931075226467, 0.486081370449679, 0.466713631560409,
    0.372898120672602, 0.250094304036213, 0.34822695035461, 0.406015037593985, 0.609720710917664,
    0.387096774193548, 0.368119630925867, 0.203475742215786, 0.141483516483517, 0.0847222222222221,
    0.0298122929701878, 0.0233419785105593, 0.618664521319388, 0.66006600660066, 0.808575803981623,
    0.777777777777778, 0.701590271281572, 0.477135461604832, 0.100378787878788, 0.0389363722697053,
    0.0233863423760524, 0.232280701754386, 0.682413656212783, 0.486238532110092, 0.564914992272025,
    0.15625, 0.255707762557078, 0.441992644600468, 0.547008547008547, 0.394882860665845,
    0.426544766708701, 0.642018196856907, 0.759853039412158, 0.739541396814283, 0.730092508615999,
    0.416784402373552, 0.45883586785527, 0.297720313031644, 0.303643724696356, 0.755342667649227,
    0.868071654373024, 0.603372139702931, 0.520511234796949, 0.537961835160374, 0.458937198067633,
    0.455561981877771, 0.283157213715764, 0.0991863618752422, 0.00366724570546222, 0.172358505691839,
    0.303555941023417, 0.184150368300737, 0.295922840859272, 0.228595178719867, 0.212224108658744,
    0.0175159235668789, 0.187169545294325, 0.163988249524797, 0.228464419475655, 0.129184452931925,
    0.0802088277171333, 0.0224618149146451, 0.207729468599034, 0.319815668202765, 0.338943431510052,
    0.25145579671784, 0.23110386079391, 0.424795468848333, 0.372647427854454, 0.501715854495539,
    0.620859760394644, 0.520648967551622, 0.573770491803279, 0.568393094289509, 0.662783568362968,
    0.676470588235294, 0.43859649122807, 0.643051771117166, 0.716321243523316, 0.803687635574837,
    0.802293828509011, 0.859708193041526, 0.7705918242831, 0.555905511811024, 0.476839237057221,
    0.209138840070298, 0.16656571774682, 0.246601941747573, 0.522434244455905, 0.741592920353982,
    0.80796508456083, 0.540678754067875, 0.38548457192525, 0.436204146730463, 0.416732438831887,
    0.455817378497791, 0.375316990701606, 0.441547518923466, 0.0291345329905744, 0.057683839718186,
    0.0364700585321928, 0.317765567765568, 0.213833825390131, 0.185670598514635, 0.0934730056406122,
    0.201733648542159, 0.386373254337706, 0.1960569550931, 0.0105797714769361, 0.0713994288045696,
    0.0869061413673233, 0.105697445972495, 0.0430797433547203, 0.0900990099009898, 0.0331404523934769,
    0.264222503160557, 0.2453300124533, 0.239376770538243, 0.201098146877145, 0.434331093463654,
    0.449464922711059, 0.559820857325656, 0.642782969885774, 0.63674762407603, 0.408780487804878,
    0.49078564500485, 0.357904946653734, 0.138399597382989, 0.0216262975778547, 0.051024507834471,
    0.197092084006462, 0.218553459119497, 0.517661388550548, 0.365230094959825, 0.350523168908819,
    0.372578807443981, 0.41830985915493, 0.328467153284672, 0.292851652574943, 0.438836612489307,
    0.227555555555556, 0.256629597946963, 0.244676227727075, 0.502622377622378, 0.40453074433657,
    0.531914893617021, 0.558035714285714, 0.502152080344333, 0.387450980392157, 0.530721649484536,
    0.669064748201438, 0.623529411764705, 0.775129850290253, 0.596341463414634, 0.634495641344956,
    0.491525423728814, 0.445676274944568, 0.445676274944568, 0.326101694915254, 0.340192499170262,
    0.38528951486698, 0.391385187480632, 0.0293501048218031, 0.211461318051576, 0.0033222591362123,
    0.0951417004048581, 0.193798449612403, 0.00289855072463779, 0.130339539978094, 0.144857296715132,
    0.0110529377545083, 0.0351872871736665, 0.337880377754459, 0.577880962431406, 0.582114500626828,
    0.489378442171518, 0.317796610169491, 0.452488687782805, 0.377495462794918, 0.421348314606741,
    0.415879017013232, 0.520325203252032, 0.566353613719886, 0.531746031746032, 0.451729478575116,
    0.63579604578564, 0.392999556933983, 0.151285930408472, 0.209266995822256, 0.241325536062378,
    0.129992737835875, 0.140602582496413, 0.084653689452241, 0.362473347547974, 0.34102833158447,
    0.526639344262295, 0.31188443860801, 0.0625521267723102, 0.00969162995594708, 0.0213492741246797,
    0.180226570545829, 0.157142857142856,
];

/// Short series for windowed variance.
pub const VARIANCE_INPUT: [f64; 12] = [
    1.0, 2.0, 8.0, 4.0, 9.0,
    6.0, 7.0, 13.0, 9.0, 10.0,
    3.0, 12.0,
];

/// Population variance of length 3 over `VARIANCE_INPUT`.
pub const VAR_P_3: [f64; 12] = [
    f64::NAN, f64::NAN, 9.55555555555556, 6.22222222222222, 4.66666666666667,
    4.22222222222222, 1.55555555555556, 9.55555555555556, 6.22222222222222, 2.88888888888889,
    9.55555555555556, 14.8888888888889,
];

/// Population variance of length 5 over `VARIANCE_INPUT`.
pub const VAR_P_5: [f64; 12] = [
    f64::NAN, f64::NAN, f64::NAN, f64::NAN, 10.16,
    6.56, 2.96, 9.36, 5.76, 6.0,
    11.04, 12.24,
];

/// Unbiased sample variance of length 3 over `VARIANCE_INPUT`.
pub const VAR_S_3: [f64; 12] = [
    f64::NAN, f64::NAN, 14.3333333333333, 9.33333333333334, 7.0,
    6.33333333333334, 2.33333333333333, 14.3333333333333, 9.33333333333334, 4.33333333333334,
    14.3333333333333, 22.3333333333333,
];

/// Unbiased sample variance of length 5 over `VARIANCE_INPUT`.
pub const VAR_S_5: [f64; 12] = [
    f64::NAN, f64::NAN, f64::NAN, f64::NAN, 12.7,
    8.2, 3.7, 11.7, 7.2, 7.5,
    13.8, 15.3,
];
